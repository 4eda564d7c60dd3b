//! HTTP client for the futures order-entry endpoint.
//!
//! One outbound POST per call, bounded timeout, no retries. Retry
//! policy, if any, belongs to a calling layer.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info};

use usdm_core::{ClientOrderId, OrderRequest, TimeInForce};

use crate::credentials::Credentials;
use crate::error::{ClientError, Result};
use crate::request::{Clock, SignedRequest, SystemClock};
use crate::response::{OrderAck, RejectBody};

/// Order-entry endpoint path.
pub const ORDER_PATH: &str = "/fapi/v1/order";

/// Header carrying the API key.
const API_KEY_HEADER: &str = "X-MBX-APIKEY";

/// Bound on a single request/response exchange.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// REST client for the USDT-M futures order-entry API.
///
/// Holds a single `reqwest::Client` for connection pooling. The client
/// keeps no per-order state, so one instance may be shared across
/// concurrent callers.
pub struct FuturesClient {
    credentials: Credentials,
    http: reqwest::Client,
    clock: Arc<dyn Clock>,
}

impl FuturesClient {
    /// Create a client using the system clock.
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_clock(credentials, Arc::new(SystemClock))
    }

    /// Create a client with an injected clock (tests, replay).
    pub fn with_clock(credentials: Credentials, clock: Arc<dyn Clock>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()?;
        Ok(Self {
            credentials,
            http,
            clock,
        })
    }

    /// Place an order.
    ///
    /// Optional parameters (`price`, `timeInForce`, `stopPrice`) are
    /// omitted from the wire entirely when absent, never sent as empty
    /// values. Exactly one request/response exchange per call; a network
    /// failure is `ClientError::Transport`, a well-formed decline is
    /// `ClientError::Rejected`.
    ///
    /// A clock-skew rejection (local `timestamp` outside the server's
    /// `recvWindow`) surfaces as `Rejected` like any other decline; it is
    /// an external failure mode, not detectable locally.
    pub async fn place_order(
        &self,
        order: &OrderRequest,
        time_in_force: Option<TimeInForce>,
    ) -> Result<OrderAck> {
        let params = order_params(order, time_in_force, &ClientOrderId::new());
        let signed = SignedRequest::build(params, &self.credentials, self.clock.as_ref())?;

        // Canonical string excludes the signature, safe to log.
        info!(path = ORDER_PATH, params = %signed.canonical(), "placing order");

        let url = format!(
            "{}{}?{}",
            self.credentials.base_url(),
            ORDER_PATH,
            signed.query()
        );
        let resp = self
            .http
            .post(&url)
            .header(API_KEY_HEADER, self.credentials.api_key())
            .send()
            .await?;

        let http_status = resp.status().as_u16();
        let body = resp.text().await?;

        info!(path = ORDER_PATH, http_status, "order response received");
        debug!(body = %body, "raw order response");

        classify_response(http_status, &body)
    }
}

/// Assemble order parameters in wire order.
///
/// The exchange recomputes the HMAC over the received query string, so
/// this insertion order is what ultimately gets signed and sent.
fn order_params(
    order: &OrderRequest,
    time_in_force: Option<TimeInForce>,
    client_order_id: &ClientOrderId,
) -> Vec<(String, String)> {
    let mut params = vec![
        ("symbol".to_string(), order.symbol().to_string()),
        ("side".to_string(), order.side().to_string()),
        ("type".to_string(), order.order_type().wire_str().to_string()),
        ("quantity".to_string(), order.quantity().to_string()),
    ];

    if let Some(price) = order.price() {
        params.push(("price".to_string(), price.to_string()));
    }
    if let Some(tif) = time_in_force {
        params.push(("timeInForce".to_string(), tif.to_string()));
    }
    if let Some(stop_price) = order.stop_price() {
        params.push(("stopPrice".to_string(), stop_price.to_string()));
    }
    params.push((
        "newClientOrderId".to_string(),
        client_order_id.as_str().to_string(),
    ));

    params
}

/// Classify an HTTP response into an acknowledgement or a rejection.
///
/// HTTP status >= 400, or a parsed non-zero business `code` in the body,
/// means `Rejected` carrying the exchange's status/code/message verbatim.
/// Anything else is `Accepted`; fields missing from the body stay absent.
fn classify_response(http_status: u16, body: &str) -> Result<OrderAck> {
    // RejectBody parses only when the body carries a business `code`.
    let reject: Option<RejectBody> = serde_json::from_str(body).ok();
    let code = reject.as_ref().map(|r| r.code);

    if http_status >= 400 || code.is_some_and(|c| c != 0) {
        let message = reject
            .and_then(|r| r.msg)
            .unwrap_or_else(|| body.to_string());
        return Err(ClientError::Rejected {
            http_status,
            code,
            message,
        });
    }

    // A 2xx body that is not a JSON object (or carries unexpected field
    // shapes) acknowledges the order with every field absent.
    Ok(serde_json::from_str(body).unwrap_or_default())
}
