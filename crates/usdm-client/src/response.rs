//! Response types consumed from the order-entry endpoint.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Successful order acknowledgement.
///
/// Every field is optional: a 2xx body that omits a field yields `None`
/// here — values are passed through, never synthesized. Callers should
/// still inspect `status` (an accepted order may be, e.g., immediately
/// expired by the exchange).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderAck {
    /// Exchange-assigned order ID.
    #[serde(rename = "orderId", default)]
    pub order_id: Option<u64>,

    /// Order status (NEW, FILLED, PARTIALLY_FILLED, EXPIRED, ...).
    #[serde(default)]
    pub status: Option<String>,

    /// Quantity already executed, as a decimal string on the wire.
    #[serde(
        rename = "executedQty",
        default,
        with = "rust_decimal::serde::str_option"
    )]
    pub executed_qty: Option<Decimal>,

    /// Average fill price, as a decimal string on the wire.
    #[serde(
        rename = "avgPrice",
        default,
        with = "rust_decimal::serde::str_option"
    )]
    pub avg_price: Option<Decimal>,
}

/// Exchange error body: `{"code": -2019, "msg": "Margin is insufficient."}`.
#[derive(Debug, Clone, Deserialize)]
pub struct RejectBody {
    /// Numeric business error code (non-zero on error).
    pub code: i64,
    /// Human-readable error message.
    #[serde(default)]
    pub msg: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_full_ack_deserialization() {
        let json = r#"{
            "orderId": 4055310423,
            "status": "FILLED",
            "executedQty": "0.002",
            "avgPrice": "67412.50",
            "symbol": "BTCUSDT"
        }"#;
        let ack: OrderAck = serde_json::from_str(json).unwrap();
        assert_eq!(ack.order_id, Some(4055310423));
        assert_eq!(ack.status.as_deref(), Some("FILLED"));
        assert_eq!(ack.executed_qty, Some(dec!(0.002)));
        assert_eq!(ack.avg_price, Some(dec!(67412.50)));
    }

    #[test]
    fn test_missing_fields_stay_absent() {
        let ack: OrderAck = serde_json::from_str(r#"{"orderId": 7}"#).unwrap();
        assert_eq!(ack.order_id, Some(7));
        assert!(ack.status.is_none());
        assert!(ack.executed_qty.is_none());
        assert!(ack.avg_price.is_none());

        let empty: OrderAck = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, OrderAck::default());
    }

    #[test]
    fn test_reject_body_deserialization() {
        let body: RejectBody =
            serde_json::from_str(r#"{"code": -2019, "msg": "Margin is insufficient."}"#).unwrap();
        assert_eq!(body.code, -2019);
        assert!(body.msg.unwrap().contains("insufficient"));

        let bare: RejectBody = serde_json::from_str(r#"{"code": -1021}"#).unwrap();
        assert_eq!(bare.code, -1021);
        assert!(bare.msg.is_none());
    }
}
