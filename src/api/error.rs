//! Errors raised while talking to the donation API.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Could not reach the server or the connection broke mid-request
    #[error("Connection to '{url}' failed: {source}")]
    Connection {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Request exceeded the configured timeout
    #[error("Request to '{url}' timed out")]
    Timeout { url: String },

    /// Server answered with a non-success status
    #[error("Server error: {status} - {message}")]
    Status { status: u16, message: String },

    /// Response body was not the JSON we expected
    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    /// Short error kind for structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Connection { .. } => "connection_error",
            ApiError::Timeout { .. } => "timeout",
            ApiError::Status { .. } => "status_error",
            ApiError::Decode(_) => "decode_error",
            ApiError::InvalidUrl(_) => "invalid_url",
        }
    }

    /// Whether retrying the same request could plausibly succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            ApiError::Connection { .. } | ApiError::Timeout { .. } => true,
            ApiError::Status { status, .. } => *status >= 500,
            ApiError::Decode(_) | ApiError::InvalidUrl(_) => false,
        }
    }
}
