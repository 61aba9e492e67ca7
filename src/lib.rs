pub mod cli;
pub mod codec;
pub mod error;
pub mod logger;
pub mod report;
pub mod result;
pub mod token;

pub use codec::{decode_base64, decode_base64_message, encode_base64};
pub use error::{DecodeError, TokenError};
pub use token::{DEFAULT_TOKEN_LENGTH, generate_secure_token};
