//! Text checksums.
//!
//! MD5 is used as a demonstration checksum only. It is not collision
//! resistant and must not be used where integrity against an adversary
//! matters.

use md5::{Digest, Md5};

/// Length of a rendered checksum in hex characters.
pub const CHECKSUM_LEN: usize = 32;

/// Compute the MD5 digest of the UTF-8 bytes of `text` as lowercase hex.
///
/// # Example
///
/// ```rust
/// use tokensum::checksum;
///
/// assert_eq!(checksum("hello"), "5d41402abc4b2a76b9719d911017c592");
/// ```
pub fn checksum(text: &str) -> String {
    hex::encode(Md5::digest(text.as_bytes()))
}
