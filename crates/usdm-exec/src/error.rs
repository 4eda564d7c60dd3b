//! Error types for usdm-exec.

use thiserror::Error;
use usdm_client::ClientError;
use usdm_core::ValidationError;

/// Execution error types.
///
/// Both kinds propagate from the layers below unchanged; nothing here
/// retries or rolls anything back.
#[derive(Debug, Error)]
pub enum ExecError {
    #[error("invalid input: {0}")]
    Invalid(#[from] ValidationError),

    #[error(transparent)]
    Client(#[from] ClientError),
}

impl ExecError {
    /// True for local validation failures that never reached the network.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }
}

/// Result type alias for execution operations.
pub type Result<T> = std::result::Result<T, ExecError>;
