//! Dashboard error types

use gym_client::ClientError;
use thiserror::Error;

/// Dashboard-layer error.
///
/// `Validation` failures are detected before any network call and rendered
/// inline next to the offending field. `VerificationFailed` is the
/// credential gate in front of destructive operations.
#[derive(Debug, Error)]
pub enum DeskError {
    /// Client-side validation failure; no request was made
    #[error("{0}")]
    Validation(String),

    /// Administrator re-authentication did not verify
    #[error("Administrator verification failed")]
    VerificationFailed,

    /// Error from the API client (rate limit, rejection, transport)
    #[error(transparent)]
    Client(#[from] ClientError),
}

impl DeskError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Whether this failure never left the client
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// Result type for dashboard operations
pub type DeskResult<T> = Result<T, DeskError>;
