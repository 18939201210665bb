//! Module-specific error types.
//!
//! Four kinds of failure exist here: bad invocation parameters, remote API
//! errors surfaced by the client, a mutating response that carried no
//! Location header while a wait was requested, and update targets that do
//! not exist. Not-found on delete is deliberately NOT an error; the absent
//! path handles it as a no-op success before this type gets involved.

use ionos_client::IonosError;
use thiserror::Error;

/// Errors that can occur while reconciling a Network Load Balancer.
#[derive(Debug, Error)]
pub enum ModuleError {
    /// Ionos API error (remote failure, parse failure, wait timeout)
    #[error("Ionos error: {0}")]
    Api(#[from] IonosError),

    /// Invalid invocation parameters for the selected state
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Update target does not exist
    #[error("Network Load Balancer not found: {0}")]
    NotFound(String),

    /// A wait was requested but the mutating response had no Location header
    #[error("response did not include a Location header to wait on")]
    MissingLocation,
}
