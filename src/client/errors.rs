//! # Client Errors

use thiserror::Error;

/// Result type for client calls
pub type ClientResult<T> = Result<T, ClientError>;

/// Client errors
#[derive(Debug, Error)]
pub enum ClientError {
    /// Base URL could not be parsed or cannot carry a path
    #[error("Invalid base URL: {0}")]
    InvalidUrl(String),

    /// Transport or body decoding failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("{status}: {message}")]
    Api { status: u16, message: String },
}

impl ClientError {
    /// True if the server reported that the record does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::Api { status: 404, .. })
    }

    /// True if the server rejected the request body
    pub fn is_bad_request(&self) -> bool {
        matches!(self, ClientError::Api { status: 400, .. })
    }
}
