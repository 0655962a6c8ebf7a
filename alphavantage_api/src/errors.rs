//! Error types for the API client.

use thiserror::Error;

/// Errors that can occur when making API requests.
#[derive(Error, Debug)]
pub enum Error {
    /// The API returned a non-success status with a body snippet.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// The response body was not a valid time-series envelope.
    #[error("Failed to parse response: {0}")]
    ParseFailed(String),
    /// The request could not be sent or the body could not be read.
    #[error("Network error")]
    Network(#[from] reqwest::Error),
    /// A request URL could not be constructed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}
