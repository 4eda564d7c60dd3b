//! Core domain types for the USDT-M futures trading client.
//!
//! This crate provides the fundamental types used throughout the system:
//! - `Price`, `Quantity`: precision-safe numeric types
//! - `OrderSide`, `OrderType`, `TimeInForce`: trading enums
//! - `OrderRequest`: a validated, immutable order description
//! - `validate_order`: the single entry point that constructs `OrderRequest`

pub mod decimal;
pub mod error;
pub mod order;
pub mod validate;

pub use decimal::{Price, Quantity};
pub use error::{Result, ValidationError};
pub use order::{ClientOrderId, OrderRequest, OrderSide, OrderType, TimeInForce};
pub use validate::validate_order;
