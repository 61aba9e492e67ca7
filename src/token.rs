use base64::{Engine, engine::general_purpose};
use openssl::rand::rand_bytes;

use crate::error::TokenError;

pub const DEFAULT_TOKEN_LENGTH: usize = 20;

/// Longest token `generate_secure_token` will produce.
pub const MAX_TOKEN_LENGTH: usize = 4096;

/// Bits of entropy carried by one URL-safe base64 character.
const BITS_PER_CHAR: usize = 6;

/// Number of random bytes drawn for a token of `length` characters.
///
/// `ceil(3 * length / 4)` bytes encode to at least `length` characters whose
/// bits all come from the random source, so truncation never keeps a padding
/// character or a partially filled trailing character. `None` on overflow.
pub fn random_bytes_for(length: usize) -> Option<usize> {
    length.checked_mul(3).map(|n| n.div_ceil(4))
}

pub fn entropy_bits(length: usize) -> usize {
    length.saturating_mul(BITS_PER_CHAR)
}

pub fn is_token_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

/// Parse a token length given on the command line.
pub fn parse_length(raw: &str) -> Result<usize, TokenError> {
    match raw.trim().parse::<usize>() {
        Ok(length) if (1..=MAX_TOKEN_LENGTH).contains(&length) => Ok(length),
        _ => Err(TokenError::InvalidLength(raw.to_string())),
    }
}

/// Generate a URL-safe token of exactly `length` characters from OpenSSL's CSPRNG.
pub fn generate_secure_token(length: usize) -> Result<String, TokenError> {
    let byte_count = match random_bytes_for(length) {
        Some(n) if (1..=MAX_TOKEN_LENGTH).contains(&length) => n,
        _ => return Err(TokenError::InvalidLength(length.to_string())),
    };

    let mut buf = vec![0u8; byte_count];
    rand_bytes(&mut buf)?;
    log::debug!(
        "Drew {} random bytes for a {length} character token ({} bits)",
        buf.len(),
        entropy_bits(length)
    );

    let mut token = general_purpose::URL_SAFE_NO_PAD.encode(&buf);
    token.truncate(length);
    Ok(token)
}
