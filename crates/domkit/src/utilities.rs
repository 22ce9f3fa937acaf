//! Utility functions and constants for markup handling.

use once_cell::sync::Lazy;
use regex::Regex;

/// Void (self-closing) HTML elements
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "command", "embed", "hr", "img", "input",
    "keygen", "link", "meta", "param", "source", "track", "wbr",
];

static TAG_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_:][A-Za-z0-9_:.\-]*$").expect("valid tag name regex"));

/// Check if a tag is a void element
pub fn is_void(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag.to_lowercase().as_str())
}

/// Check if a string can be used as an element name
pub fn is_valid_tag_name(tag: &str) -> bool {
    TAG_NAME_RE.is_match(tag)
}

/// Trim text the way the DOM does, which also strips the byte order mark
pub(crate) fn trim_text(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// Escape HTML attribute value
pub(crate) fn escape_html_attr(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
