//! Pseudorandom token generation.

use rand::RngCore;

/// Number of tokens issued per request.
pub const TOKEN_COUNT: usize = 5;

/// Length of a single token in hex characters.
pub const TOKEN_LEN: usize = 32;

/// Generate a random 32-character lowercase hex token.
///
/// Draws 16 bytes from the thread-local CSPRNG. Tokens are not derived from
/// any input, so two calls are independent.
///
/// # Example
///
/// ```rust
/// use tokensum::generate_token;
///
/// let token = generate_token();
/// assert_eq!(token.len(), 32);
/// assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
/// ```
pub fn generate_token() -> String {
    let mut bytes = [0u8; TOKEN_LEN / 2];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Generate `count` tokens in generation order.
pub fn generate_tokens(count: usize) -> Vec<String> {
    (0..count).map(|_| generate_token()).collect()
}
