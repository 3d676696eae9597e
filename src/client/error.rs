//! Errors raised by the inventory API client.

use thiserror::Error;

/// Errors that can occur while talking to the inventory API.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Base URL is not an absolute http(s) URL
    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// HTTP client could not be constructed
    #[error("Failed to build HTTP client: {source}")]
    Build {
        #[source]
        source: reqwest::Error,
    },

    /// Request never produced a response
    #[error("Request to '{url}' failed: {source}")]
    Connection {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with a non-success status
    #[error("{method} {url} returned {status}")]
    Status {
        method: &'static str,
        url: String,
        status: u16,
        body: String,
    },

    /// Response body did not decode as the expected JSON
    #[error("Malformed response from '{url}': {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl ClientError {
    /// Short classification used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            ClientError::InvalidBaseUrl { .. } => "invalid_base_url",
            ClientError::Build { .. } => "build_error",
            ClientError::Connection { .. } => "connection_error",
            ClientError::Status { .. } => "status_error",
            ClientError::Decode { .. } => "decode_error",
        }
    }

    /// HTTP status, when the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
