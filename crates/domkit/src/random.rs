//! Random strings over a character set.

use rand::seq::SliceRandom;
use rand::Rng;

/// Characters used when no alphabet is given
pub const DEFAULT_ALPHABET: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// A string of `length` characters drawn uniformly from `characters`
/// (or [`DEFAULT_ALPHABET`]) using the thread-local generator.
pub fn random_string(length: usize, characters: Option<&str>) -> String {
    random_string_with(&mut rand::thread_rng(), length, characters)
}

/// Like [`random_string`] with a caller-supplied generator.
///
/// An empty alphabet yields an empty string, as does `Some("")`.
pub fn random_string_with<R: Rng + ?Sized>(
    rng: &mut R,
    length: usize,
    characters: Option<&str>,
) -> String {
    let alphabet: Vec<char> = characters.unwrap_or(DEFAULT_ALPHABET).chars().collect();
    (0..length)
        .filter_map(|_| alphabet.choose(&mut *rng).copied())
        .collect()
}
