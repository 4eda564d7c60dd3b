//! Plain key/value rendering of order outcomes.
//!
//! Every outcome the core can produce — acknowledgement, rejection,
//! validation failure, transport failure — renders as printable
//! key/value lines; no outcome is unrepresentable.

use std::fmt::Display;

use usdm_client::{ClientError, OrderAck};
use usdm_exec::{ExecError, TwapReport};

use crate::error::AppError;

fn opt<T: Display>(value: &Option<T>) -> String {
    value
        .as_ref()
        .map(|v| v.to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Section header, e.g. `=== RESPONSE ===`.
pub fn section(title: &str) -> String {
    format!("=== {title} ===")
}

/// Render an acknowledgement as key/value lines.
pub fn render_ack(ack: &OrderAck) -> String {
    format!(
        "orderId     : {}\nstatus      : {}\nexecutedQty : {}\navgPrice    : {}",
        opt(&ack.order_id),
        opt(&ack.status),
        opt(&ack.executed_qty),
        opt(&ack.avg_price),
    )
}

/// Render one TWAP slice outcome as a single line.
pub fn render_slice(slice: u32, result: &Result<OrderAck, ExecError>) -> String {
    match result {
        Ok(ack) => format!(
            "[slice {slice}] orderId={} status={} executedQty={} avgPrice={}",
            opt(&ack.order_id),
            opt(&ack.status),
            opt(&ack.executed_qty),
            opt(&ack.avg_price),
        ),
        Err(err) => format!("[slice {slice}] FAILED: {err}"),
    }
}

/// Render a whole TWAP report, one line per attempted slice.
pub fn render_twap_report(report: &TwapReport) -> String {
    report
        .outcomes()
        .iter()
        .map(|o| render_slice(o.slice, &o.result))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render a failure as key/value lines naming its kind.
pub fn render_error(err: &AppError) -> String {
    match err {
        AppError::Validation(e) | AppError::Exec(ExecError::Invalid(e)) => {
            format!("result      : INVALID_INPUT\nerror       : {e}")
        }
        AppError::Client(e) | AppError::Exec(ExecError::Client(e)) => render_client_error(e),
        other => format!("result      : ERROR\nerror       : {other}"),
    }
}

fn render_client_error(err: &ClientError) -> String {
    match err {
        ClientError::Rejected {
            http_status,
            code,
            message,
        } => format!(
            "result      : REJECTED\nhttpStatus  : {http_status}\ncode        : {}\nmsg         : {message}",
            code.map(|c| c.to_string()).unwrap_or_else(|| "-".to_string()),
        ),
        other => format!("result      : TRANSPORT_ERROR\nerror       : {other}"),
    }
}
