//! Order input validation.
//!
//! The single construction path for [`OrderRequest`]: raw user-supplied
//! parameters go in, a normalized order (or the violated constraint)
//! comes out. Pure and deterministic; performs no I/O.

use crate::decimal::{Price, Quantity};
use crate::error::{Result, ValidationError};
use crate::order::{OrderRequest, OrderSide, OrderType};

const SYMBOL_MIN_LEN: usize = 5;
const SYMBOL_MAX_LEN: usize = 20;

fn normalize_symbol(symbol: &str) -> Result<String> {
    let s = symbol.trim().to_ascii_uppercase();
    if s.is_empty() || !s.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ValidationError::SymbolNotAlphanumeric);
    }
    if s.len() < SYMBOL_MIN_LEN || s.len() > SYMBOL_MAX_LEN {
        return Err(ValidationError::SymbolLength);
    }
    Ok(s)
}

/// Validate raw order parameters and return a normalized [`OrderRequest`].
///
/// Symbol is trimmed and uppercased; side and order type accept any case.
/// `price` is required (and must be positive) for LIMIT and STOP_LIMIT;
/// `stop_price` for STOP_LIMIT only. For other types the caller simply
/// omits them — a stray `price` on a MARKET order is not itself an error.
pub fn validate_order(
    symbol: &str,
    side: &str,
    order_type: &str,
    quantity: Quantity,
    price: Option<Price>,
    stop_price: Option<Price>,
) -> Result<OrderRequest> {
    let norm_symbol = normalize_symbol(symbol)?;
    let norm_side: OrderSide = side.parse()?;
    let norm_type: OrderType = order_type.parse()?;

    if !quantity.is_positive() {
        return Err(ValidationError::NonPositiveQuantity);
    }

    if norm_type.requires_price() && !price.is_some_and(|p| p.is_positive()) {
        return Err(ValidationError::MissingOrNonPositivePrice);
    }

    if norm_type.requires_stop_price() && !stop_price.is_some_and(|p| p.is_positive()) {
        return Err(ValidationError::MissingOrNonPositiveStopPrice);
    }

    Ok(OrderRequest::new_unchecked(
        norm_symbol,
        norm_side,
        norm_type,
        quantity,
        price,
        stop_price,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn qty(v: rust_decimal::Decimal) -> Quantity {
        Quantity::new(v)
    }

    fn px(v: rust_decimal::Decimal) -> Option<Price> {
        Some(Price::new(v))
    }

    #[test]
    fn test_market_order_normalized() {
        let order =
            validate_order("  btcusdt ", "buy", "market", qty(dec!(0.001)), None, None).unwrap();
        assert_eq!(order.symbol(), "BTCUSDT");
        assert_eq!(order.side(), OrderSide::Buy);
        assert_eq!(order.order_type(), OrderType::Market);
        assert_eq!(order.quantity(), qty(dec!(0.001)));
        assert!(order.price().is_none());
        assert!(order.stop_price().is_none());
    }

    #[test]
    fn test_limit_order_requires_price() {
        let err = validate_order("BTCUSDT", "SELL", "LIMIT", qty(dec!(0.001)), None, None)
            .unwrap_err();
        assert_eq!(err, ValidationError::MissingOrNonPositivePrice);

        let err = validate_order(
            "BTCUSDT",
            "SELL",
            "LIMIT",
            qty(dec!(0.001)),
            px(dec!(0)),
            None,
        )
        .unwrap_err();
        assert_eq!(err, ValidationError::MissingOrNonPositivePrice);

        let order = validate_order(
            "BTCUSDT",
            "SELL",
            "LIMIT",
            qty(dec!(0.001)),
            px(dec!(75000)),
            None,
        )
        .unwrap();
        assert_eq!(order.price(), Some(Price::new(dec!(75000))));
    }

    #[test]
    fn test_stop_limit_requires_both_prices() {
        // Missing stop_price
        let err = validate_order(
            "BTCUSDT",
            "BUY",
            "STOP_LIMIT",
            qty(dec!(0.001)),
            px(dec!(75000)),
            None,
        )
        .unwrap_err();
        assert_eq!(err, ValidationError::MissingOrNonPositiveStopPrice);

        // Missing price
        let err = validate_order(
            "BTCUSDT",
            "BUY",
            "STOP_LIMIT",
            qty(dec!(0.001)),
            None,
            px(dec!(74000)),
        )
        .unwrap_err();
        assert_eq!(err, ValidationError::MissingOrNonPositivePrice);

        let order = validate_order(
            "BTCUSDT",
            "BUY",
            "STOP_LIMIT",
            qty(dec!(0.001)),
            px(dec!(75000)),
            px(dec!(74000)),
        )
        .unwrap();
        assert_eq!(order.order_type(), OrderType::StopLimit);
        assert_eq!(order.stop_price(), Some(Price::new(dec!(74000))));
    }

    #[test]
    fn test_symbol_rules() {
        let err =
            validate_order("BTC/USDT", "BUY", "MARKET", qty(dec!(1)), None, None).unwrap_err();
        assert_eq!(err, ValidationError::SymbolNotAlphanumeric);

        let err = validate_order("BTC", "BUY", "MARKET", qty(dec!(1)), None, None).unwrap_err();
        assert_eq!(err, ValidationError::SymbolLength);

        let err = validate_order(
            "A2345678901234567890X",
            "BUY",
            "MARKET",
            qty(dec!(1)),
            None,
            None,
        )
        .unwrap_err();
        assert_eq!(err, ValidationError::SymbolLength);

        // Exactly at the bounds is accepted.
        assert!(validate_order("AB123", "BUY", "MARKET", qty(dec!(1)), None, None).is_ok());
        assert!(validate_order(
            "A2345678901234567890",
            "BUY",
            "MARKET",
            qty(dec!(1)),
            None,
            None
        )
        .is_ok());
    }

    #[test]
    fn test_side_and_type_rules() {
        let err = validate_order("BTCUSDT", "HOLD", "MARKET", qty(dec!(1)), None, None)
            .unwrap_err();
        assert_eq!(err, ValidationError::InvalidSide);

        let err = validate_order("BTCUSDT", "BUY", "TRAILING", qty(dec!(1)), None, None)
            .unwrap_err();
        assert_eq!(err, ValidationError::InvalidOrderType);
    }

    #[test]
    fn test_quantity_must_be_positive() {
        let err = validate_order("BTCUSDT", "BUY", "MARKET", qty(dec!(0)), None, None)
            .unwrap_err();
        assert_eq!(err, ValidationError::NonPositiveQuantity);

        let err = validate_order("BTCUSDT", "BUY", "MARKET", qty(dec!(-0.1)), None, None)
            .unwrap_err();
        assert_eq!(err, ValidationError::NonPositiveQuantity);
    }

    #[test]
    fn test_deterministic() {
        let a = validate_order("ethusdt", "sell", "limit", qty(dec!(2)), px(dec!(3000)), None);
        let b = validate_order("ethusdt", "sell", "limit", qty(dec!(2)), px(dec!(3000)), None);
        assert_eq!(a, b);
    }

    #[test]
    fn test_stray_price_on_market_is_not_an_error() {
        // Presence for types that do not require it is not checked here;
        // callers simply omit it at the client boundary.
        let order = validate_order(
            "BTCUSDT",
            "BUY",
            "MARKET",
            qty(dec!(1)),
            px(dec!(50000)),
            None,
        )
        .unwrap();
        assert_eq!(order.order_type(), OrderType::Market);
    }
}
