//! Time-weighted order slicing (TWAP).
//!
//! Splits one large order into `slice_count` MARKET orders spaced
//! `interval` apart. One logical thread of control per run; the
//! inter-slice delay suspends the calling task via the [`Wait`] port so
//! tests can substitute a recording no-op for real time passing.
//!
//! There is no cancellation mechanism for an in-flight run: a MARKET
//! order already sent cannot be un-sent, so stopping early is a
//! caller-level concern.

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use usdm_client::OrderAck;
use usdm_core::{validate_order, OrderRequest, OrderSide, Quantity, ValidationError};

use crate::error::ExecError;
use crate::orders::{BoxFuture, MarketOrders};

/// Suspension capability between slices.
pub trait Wait: Send + Sync {
    fn wait(&self, duration: Duration) -> BoxFuture<'_, ()>;
}

/// Real wait backed by the tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioWait;

impl Wait for TokioWait {
    fn wait(&self, duration: Duration) -> BoxFuture<'_, ()> {
        Box::pin(tokio::time::sleep(duration))
    }
}

/// A validated TWAP plan.
///
/// Constructed once per invocation and consumed slice-by-slice; carries
/// no state across runs. The per-slice quantity is validated here, at
/// construction — it is invariant across slices, so it is never
/// re-checked inside the loop.
#[derive(Debug, Clone)]
pub struct TwapPlan {
    slice_order: OrderRequest,
    total_quantity: Quantity,
    slice_count: u32,
    interval: Duration,
}

impl TwapPlan {
    /// Validate raw TWAP parameters into a plan.
    ///
    /// Fails with the violated constraint before any order is placed:
    /// `slice_count` must be positive, and the derived per-slice MARKET
    /// order (quantity `total_quantity / slice_count`) must itself pass
    /// order validation.
    pub fn new(
        symbol: &str,
        side: &str,
        total_quantity: Quantity,
        slice_count: u32,
        interval: Duration,
    ) -> Result<Self, ValidationError> {
        let per_slice = total_quantity
            .split(slice_count)
            .ok_or(ValidationError::NonPositiveSlices)?;
        let slice_order = validate_order(symbol, side, "MARKET", per_slice, None, None)?;
        Ok(Self {
            slice_order,
            total_quantity,
            slice_count,
            interval,
        })
    }

    pub fn symbol(&self) -> &str {
        self.slice_order.symbol()
    }

    pub fn side(&self) -> OrderSide {
        self.slice_order.side()
    }

    pub fn total_quantity(&self) -> Quantity {
        self.total_quantity
    }

    pub fn per_slice_quantity(&self) -> Quantity {
        self.slice_order.quantity()
    }

    pub fn slice_count(&self) -> u32 {
        self.slice_count
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// The validated MARKET order submitted for every slice.
    pub fn slice_order(&self) -> &OrderRequest {
        &self.slice_order
    }
}

/// Result of a single slice, 1-based.
#[derive(Debug)]
pub struct SliceOutcome {
    pub slice: u32,
    pub result: Result<OrderAck, ExecError>,
}

/// Outcome of a TWAP run: one entry per attempted slice, in order.
///
/// A failed slice is the final entry; already-placed orders are not
/// rolled back.
#[derive(Debug, Default)]
pub struct TwapReport {
    outcomes: Vec<SliceOutcome>,
}

impl TwapReport {
    pub fn outcomes(&self) -> &[SliceOutcome] {
        &self.outcomes
    }

    /// Acknowledgements for the slices that succeeded.
    pub fn acks(&self) -> impl Iterator<Item = &OrderAck> {
        self.outcomes.iter().filter_map(|o| o.result.as_ref().ok())
    }

    /// The failure that aborted the run, if any.
    pub fn error(&self) -> Option<&ExecError> {
        self.outcomes.last().and_then(|o| o.result.as_ref().err())
    }

    /// True when every planned slice was accepted.
    pub fn is_complete(&self, plan: &TwapPlan) -> bool {
        self.error().is_none() && self.outcomes.len() == plan.slice_count() as usize
    }
}

/// Drives a [`TwapPlan`] through the market-order gateway.
pub struct TwapExecutor {
    gateway: Arc<dyn MarketOrders>,
    wait: Arc<dyn Wait>,
}

impl TwapExecutor {
    /// Executor with the real tokio timer.
    pub fn new(gateway: Arc<dyn MarketOrders>) -> Self {
        Self::with_wait(gateway, Arc::new(TokioWait))
    }

    /// Executor with an injected wait (tests, simulated clocks).
    pub fn with_wait(gateway: Arc<dyn MarketOrders>, wait: Arc<dyn Wait>) -> Self {
        Self { gateway, wait }
    }

    /// Validate raw parameters and run the plan.
    ///
    /// Validation failures (`slice_count == 0`, bad per-slice order)
    /// return `Err` before any order is placed. Once the loop starts,
    /// the run always yields a report; a slice failure ends the run
    /// early and is the report's last outcome.
    pub async fn run_twap(
        &self,
        symbol: &str,
        side: &str,
        total_quantity: Quantity,
        slice_count: u32,
        interval: Duration,
    ) -> Result<TwapReport, ExecError> {
        let plan = TwapPlan::new(symbol, side, total_quantity, slice_count, interval)?;
        Ok(self.run(&plan).await)
    }

    /// Run a validated plan to completion or first failure.
    pub async fn run(&self, plan: &TwapPlan) -> TwapReport {
        info!(
            symbol = %plan.symbol(),
            side = %plan.side(),
            total_quantity = %plan.total_quantity(),
            slices = plan.slice_count(),
            interval_secs = plan.interval().as_secs(),
            per_slice_quantity = %plan.per_slice_quantity(),
            "starting TWAP run"
        );

        let mut outcomes = Vec::with_capacity(plan.slice_count() as usize);
        for slice in 1..=plan.slice_count() {
            info!(
                slice,
                of = plan.slice_count(),
                quantity = %plan.per_slice_quantity(),
                "placing TWAP slice"
            );

            let result = self.gateway.place_market(plan.slice_order()).await;
            let failed = result.is_err();
            outcomes.push(SliceOutcome { slice, result });

            if failed {
                warn!(slice, "TWAP slice failed, aborting remaining slices");
                break;
            }
            // No pause after the last slice.
            if slice < plan.slice_count() && !plan.interval().is_zero() {
                self.wait.wait(plan.interval()).await;
            }
        }

        let report = TwapReport { outcomes };
        info!(
            placed = report.outcomes().len(),
            complete = report.is_complete(plan),
            "TWAP run finished"
        );
        report
    }
}
