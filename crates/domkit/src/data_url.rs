//! Data URL encoding for file contents.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// Encode raw bytes as a `data:` URL with the given MIME type
pub fn to_data_url(bytes: &[u8], mime: &str) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

/// Scale image dimensions so a file of `file_size` bytes fits `max_bytes`.
///
/// The factor is `max_bytes / file_size`, never above 1, applied to both
/// sides. An empty file keeps its size.
pub fn fit_dimensions(width: u32, height: u32, file_size: u64, max_bytes: u64) -> (u32, u32) {
    if file_size == 0 || file_size <= max_bytes {
        return (width, height);
    }
    let factor = max_bytes as f64 / file_size as f64;
    let scale = |side: u32| (f64::from(side) * factor) as u32;
    (scale(width), scale(height))
}
