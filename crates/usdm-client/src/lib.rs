//! Signed REST client for the USDT-M futures order-entry API.
//!
//! The pipeline is: assemble parameters in insertion order, canonicalize
//! them into a query string, HMAC-SHA256 that exact string, append the
//! signature, and transmit the same bytes that were signed. The remote
//! side recomputes the HMAC over what it receives, so signing and
//! transmission must share one encoder — see [`request`].

pub mod client;
pub mod credentials;
pub mod error;
pub mod request;
pub mod response;
pub mod sign;

pub use client::FuturesClient;
pub use credentials::Credentials;
pub use error::{ClientError, Result};
pub use request::{Clock, SignedRequest, SystemClock};
pub use response::OrderAck;
