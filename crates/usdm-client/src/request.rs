//! Signed request construction.
//!
//! Takes an insertion-ordered parameter list, injects `timestamp` and
//! `recvWindow` when absent, canonicalizes, signs, and appends the
//! signature as the final parameter. The transmitted query string is
//! derived from the exact canonical string that was signed.

use crate::credentials::Credentials;
use crate::error::Result;
use crate::sign::{encode_query, sign_query};

/// Trait for obtaining current time, enabling testability.
pub trait Clock: Send + Sync {
    /// Returns current time in milliseconds since Unix epoch.
    fn now_ms(&self) -> u64;
}

/// System clock implementation using real time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        chrono::Utc::now().timestamp_millis() as u64
    }
}

/// A fully authenticated request, ready to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedRequest {
    canonical: String,
    query: String,
}

impl SignedRequest {
    /// Build a signed request from business parameters.
    ///
    /// `timestamp` is taken from `clock`; `recvWindow` defaults from the
    /// credentials but an explicit caller-supplied value wins. The
    /// signature is computed over the canonical encoding of every other
    /// parameter and is never part of its own payload.
    pub fn build(
        mut params: Vec<(String, String)>,
        credentials: &Credentials,
        clock: &dyn Clock,
    ) -> Result<Self> {
        if !params.iter().any(|(k, _)| k == "timestamp") {
            params.push(("timestamp".to_string(), clock.now_ms().to_string()));
        }
        if !params.iter().any(|(k, _)| k == "recvWindow") {
            params.push((
                "recvWindow".to_string(),
                credentials.recv_window().to_string(),
            ));
        }

        let canonical = encode_query(&params)?;
        let signature = sign_query(credentials.secret_bytes(), &canonical);
        let query = format!("{canonical}&signature={signature}");

        Ok(Self { canonical, query })
    }

    /// The signed payload, without the signature. Safe to log.
    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    /// The full transmitted query string, signature included.
    pub fn query(&self) -> &str {
        &self.query
    }
}
