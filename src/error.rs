use std::string::FromUtf8Error;

use openssl::error::ErrorStack;
use thiserror::Error;

/// Failure while turning Base64 text back into a string.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("invalid base64 input: {0}")]
    InvalidBase64(#[from] base64::DecodeError),

    #[error("decoded bytes are not valid UTF-8: {0}")]
    InvalidUtf8(#[from] FromUtf8Error),
}

#[derive(Debug, Error)]
pub enum TokenError {
    #[error(
        "token length must be an integer between 1 and {max}, got '{0}'",
        max = crate::token::MAX_TOKEN_LENGTH
    )]
    InvalidLength(String),

    #[error("secure random source failed: {0}")]
    RandomSource(#[from] ErrorStack),
}
