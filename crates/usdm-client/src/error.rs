//! Error types for usdm-client.

use thiserror::Error;

/// Client error types.
///
/// `Transport` means no response was obtainable; `Rejected` is a
/// well-formed response in which the exchange declined the request.
/// Neither is retried here.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("request encoding failed: {0}")]
    Encode(#[from] serde_urlencoded::ser::Error),

    #[error("exchange rejected request (HTTP {http_status}, code {code:?}): {message}")]
    Rejected {
        /// HTTP status of the response.
        http_status: u16,
        /// Exchange business error code, if the body carried one.
        code: Option<i64>,
        /// Exchange error message, verbatim.
        message: String,
    },
}

impl ClientError {
    /// Exchange business code for `Rejected` responses.
    pub fn exchange_code(&self) -> Option<i64> {
        match self {
            Self::Rejected { code, .. } => *code,
            _ => None,
        }
    }
}

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
