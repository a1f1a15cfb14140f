use thiserror::Error;

use flipstock_core::DomainError;

/// Gateway operation error.
///
/// Remote failures are opaque to the aggregation layer; callers surface one
/// user-visible message per failed operation and do not retry.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The remote store could not be reached (network/TLS/timeout).
    #[error("store transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// The remote store answered with a non-success status.
    #[error("store rejected the request ({status}): {message}")]
    Backend { status: u16, message: String },

    /// The response body did not match the expected row shape.
    #[error("failed to decode store response: {0}")]
    Decode(String),

    /// The mutation target does not exist.
    #[error("item not found")]
    NotFound,

    /// A domain rule rejected the operation (validation, status transition).
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound)
    }
}
