//! Error types for delsla

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The request could not be built, sent, or its body read.
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// The response body was not the JSON we expected.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Slack answered with `ok: false`.
    #[error("Slack API error: {method}: {code}")]
    SlackApi { method: String, code: String },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn slack_api(method: &str, code: Option<String>) -> Self {
        Error::SlackApi {
            method: method.to_string(),
            code: code.unwrap_or_else(|| "unknown_error".to_string()),
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        // The URL carries the token.
        Error::ConnectionError(err.without_url().to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::SerializationError(err.to_string())
    }
}
