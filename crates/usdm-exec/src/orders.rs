//! Order placement facade.
//!
//! Thin compositions of validate-then-send, one per order kind. The
//! [`MarketOrders`] trait is the seam the TWAP executor drives, so tests
//! can substitute a recording gateway for the real client.

use std::pin::Pin;

use tracing::info;

use usdm_client::{FuturesClient, OrderAck};
use usdm_core::{validate_order, OrderRequest, Price, Quantity, TimeInForce};

use crate::error::Result;

/// Boxed future for dyn-compatible async trait methods.
pub type BoxFuture<'a, T> = Pin<Box<dyn std::future::Future<Output = T> + Send + 'a>>;

/// Gateway for already-validated market orders.
///
/// Takes an [`OrderRequest`] rather than raw parameters so callers that
/// validate once up front (the TWAP executor) do not pay re-validation
/// per slice.
pub trait MarketOrders: Send + Sync {
    /// Submit a validated MARKET order.
    fn place_market<'a>(&'a self, order: &'a OrderRequest) -> BoxFuture<'a, Result<OrderAck>>;
}

/// Order placement facade over the exchange client.
pub struct OrderPlacer {
    client: FuturesClient,
}

impl OrderPlacer {
    pub fn new(client: FuturesClient) -> Self {
        Self { client }
    }

    /// Validate input and place a MARKET order.
    pub async fn market_order(
        &self,
        symbol: &str,
        side: &str,
        quantity: Quantity,
    ) -> Result<OrderAck> {
        let order = validate_order(symbol, side, "MARKET", quantity, None, None)?;
        info!(
            symbol = %order.symbol(),
            side = %order.side(),
            quantity = %order.quantity(),
            "placing MARKET order"
        );
        Ok(self.client.place_order(&order, None).await?)
    }

    /// Validate input and place a LIMIT order (GTC).
    pub async fn limit_order(
        &self,
        symbol: &str,
        side: &str,
        quantity: Quantity,
        price: Price,
    ) -> Result<OrderAck> {
        let order = validate_order(symbol, side, "LIMIT", quantity, Some(price), None)?;
        info!(
            symbol = %order.symbol(),
            side = %order.side(),
            quantity = %order.quantity(),
            price = %price,
            "placing LIMIT order"
        );
        Ok(self
            .client
            .place_order(&order, Some(TimeInForce::GoodTilCancelled))
            .await?)
    }

    /// Validate input and place a stop-triggered limit order (GTC).
    ///
    /// Submitted as the exchange's single-trigger `STOP` order type with
    /// both `price` and `stopPrice`: once `stopPrice` trades, a limit
    /// order at `price` is placed. This is NOT a two-phase
    /// stop-then-limit construct; there is only one trigger.
    pub async fn stop_trigger_limit_order(
        &self,
        symbol: &str,
        side: &str,
        quantity: Quantity,
        price: Price,
        stop_price: Price,
    ) -> Result<OrderAck> {
        let order = validate_order(
            symbol,
            side,
            "STOP_LIMIT",
            quantity,
            Some(price),
            Some(stop_price),
        )?;
        info!(
            symbol = %order.symbol(),
            side = %order.side(),
            quantity = %order.quantity(),
            price = %price,
            stop_price = %stop_price,
            "placing STOP_LIMIT order"
        );
        Ok(self
            .client
            .place_order(&order, Some(TimeInForce::GoodTilCancelled))
            .await?)
    }
}

impl MarketOrders for OrderPlacer {
    fn place_market<'a>(&'a self, order: &'a OrderRequest) -> BoxFuture<'a, Result<OrderAck>> {
        Box::pin(async move { Ok(self.client.place_order(order, None).await?) })
    }
}
