use std::borrow::Cow;

use serde_repr::{Deserialize_repr, Serialize_repr};

use crate::{
    codec,
    error::{DecodeError, TokenError},
    result::Outcome,
    token,
};

#[repr(i32)]
#[derive(Serialize_repr, Deserialize_repr, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Code {
    #[default]
    Success = 0,
    InvalidBase64 = -1,
    InvalidUtf8 = -2,
    InvalidLength = -3,
    RandomSourceError = -4,
    InvalidArguments = -5,
}

impl From<&DecodeError> for Code {
    fn from(e: &DecodeError) -> Self {
        match e {
            DecodeError::InvalidBase64(_) => Code::InvalidBase64,
            DecodeError::InvalidUtf8(_) => Code::InvalidUtf8,
        }
    }
}

impl From<&TokenError> for Code {
    fn from(e: &TokenError) -> Self {
        match e {
            TokenError::InvalidLength(_) => Code::InvalidLength,
            TokenError::RandomSource(_) => Code::RandomSourceError,
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug)]
pub struct ReportOk<'a> {
    pub code: Code,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<Cow<'a, str>>,
    pub result: Cow<'a, str>,
}

impl<'a> ReportOk<'a> {
    fn success(result: Cow<'a, str>) -> Self {
        ReportOk {
            code: Code::Success,
            input: None,
            result,
        }
    }

    fn with_input(mut self, input: Cow<'a, str>) -> Self {
        self.input = Some(input);
        self
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug)]
pub struct ReportError<'a> {
    pub code: Code,
    pub error: Cow<'a, str>,
}

impl<'a> ReportError<'a> {
    pub fn error(code: Code, error: Cow<'a, str>) -> Self {
        ReportError { code, error }
    }
}

pub type ReportResult<'a> = Outcome<ReportOk<'a>, ReportError<'a>>;

/// JSON envelopes for the command line tools' `--json` mode.
pub struct Report;

impl Report {
    pub fn decode(input: &str) -> ReportResult<'static> {
        codec::decode_base64(input)
            .map(|text| ReportOk::success(Cow::Owned(text)))
            .map_err(|e| {
                log::debug!("Base64 decode failed: {e}");
                ReportError::error(Code::from(&e), Cow::Owned(e.to_string()))
            })
            .into()
    }

    pub fn encode(input: &str) -> ReportResult<'_> {
        ReportResult::ok(
            ReportOk::success(Cow::Owned(codec::encode_base64(input)))
                .with_input(Cow::Borrowed(input)),
        )
    }

    pub fn token(length: usize) -> ReportResult<'static> {
        Self::from_token(token::generate_secure_token(length))
    }

    /// Parse a raw length argument, then generate.
    pub fn token_from_arg(raw: &str) -> ReportResult<'static> {
        Self::from_token(token::parse_length(raw).and_then(token::generate_secure_token))
    }

    pub fn invalid_arguments(message: impl Into<String>) -> ReportResult<'static> {
        ReportResult::err(ReportError::error(
            Code::InvalidArguments,
            Cow::Owned(message.into()),
        ))
    }

    fn from_token(res: Result<String, TokenError>) -> ReportResult<'static> {
        res.map(|t| ReportOk::success(Cow::Owned(t)))
            .map_err(|e| {
                log::debug!("Token generation failed: {e}");
                ReportError::error(Code::from(&e), Cow::Owned(e.to_string()))
            })
            .into()
    }
}
