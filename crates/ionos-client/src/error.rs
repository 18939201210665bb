//! Ionos client errors

use thiserror::Error;

/// Errors that can occur when interacting with the Ionos Cloud API
#[derive(Debug, Error)]
pub enum IonosError {
    /// HTTP request/response error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Cloud API returned an error
    #[error("Ionos API error: {0}")]
    Api(String),

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Authentication failed (bad credentials, expired contract, etc.)
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Failed to extract a request id from a Location header
    #[error("Failed to extract request ID from response header 'location': '{0}'")]
    RequestId(String),

    /// An asynchronous request did not complete within the wait timeout
    #[error("Timed out waiting for request {0} to complete")]
    WaitTimeout(String),
}
