//! Error types for gallery-fetch.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP error: status {status}")]
    HttpStatus { status: u16 },

    #[error("no Tokio runtime to run the request on: {0}")]
    NoRuntime(String),

    #[error("empty response body")]
    EmptyBody,

    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<url::ParseError> for FetchError {
    fn from(e: url::ParseError) -> Self { FetchError::InvalidUrl(e.to_string()) }
}

pub type Result<T> = std::result::Result<T, FetchError>;
