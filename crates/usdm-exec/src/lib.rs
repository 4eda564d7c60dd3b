//! Order placement facade and TWAP execution.
//!
//! [`OrderPlacer`] composes validation with the exchange client for each
//! order kind; [`TwapExecutor`] drives a sequence of market orders on a
//! fixed cadence through injectable gateway and wait ports.

pub mod error;
pub mod orders;
pub mod twap;

pub use error::{ExecError, Result};
pub use orders::{BoxFuture, MarketOrders, OrderPlacer};
pub use twap::{SliceOutcome, TokioWait, TwapExecutor, TwapPlan, TwapReport, Wait};
