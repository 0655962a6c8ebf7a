//! Error types for the function layer.

use thiserror::Error;

use crate::types::ErrorResponse;

/// Errors produced while handling one invocation.
#[derive(Error, Debug)]
pub enum HandlerError {
    /// The upstream API call failed (network, status, or decode).
    #[error("Upstream request failed: {0}")]
    Upstream(#[from] alphavantage_api::Error),
}

impl From<&HandlerError> for ErrorResponse {
    fn from(err: &HandlerError) -> Self {
        ErrorResponse::new(err.to_string())
    }
}
