//! Error types for usdm-core.

use thiserror::Error;

/// Input validation failures.
///
/// Each variant names the violated constraint; no network call is ever
/// made once one of these is raised.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("symbol must be alphanumeric, e.g. BTCUSDT")]
    SymbolNotAlphanumeric,

    #[error("symbol length must be between 5 and 20 characters")]
    SymbolLength,

    #[error("side must be BUY or SELL")]
    InvalidSide,

    #[error("order type must be MARKET, LIMIT, or STOP_LIMIT")]
    InvalidOrderType,

    #[error("quantity must be positive")]
    NonPositiveQuantity,

    #[error("price must be positive for LIMIT and STOP_LIMIT orders")]
    MissingOrNonPositivePrice,

    #[error("stop_price must be positive for STOP_LIMIT orders")]
    MissingOrNonPositiveStopPrice,

    #[error("slices must be a positive integer")]
    NonPositiveSlices,
}

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, ValidationError>;
