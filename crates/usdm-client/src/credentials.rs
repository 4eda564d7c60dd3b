//! API credentials and endpoint configuration.
//!
//! This crate only consumes the credential structure; how it is loaded
//! (environment, config file) is the caller's concern.

use std::fmt;
use zeroize::Zeroizing;

/// Default receive window in milliseconds.
pub const DEFAULT_RECV_WINDOW_MS: u64 = 5_000;

/// Default base URL (futures testnet).
pub const DEFAULT_BASE_URL: &str = "https://testnet.binancefuture.com";

/// Credentials and endpoint settings for the signed-request pipeline.
///
/// The secret is held in a zeroizing buffer and is never logged; the
/// `Debug` impl redacts it.
#[derive(Clone)]
pub struct Credentials {
    api_key: String,
    api_secret: Zeroizing<String>,
    base_url: String,
    recv_window: u64,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: Zeroizing::new(api_secret.into()),
            base_url: DEFAULT_BASE_URL.to_string(),
            recv_window: DEFAULT_RECV_WINDOW_MS,
        }
    }

    /// Override the base URL (e.g. for mainnet or a mock server).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the receive window tolerance.
    #[must_use]
    pub fn with_recv_window(mut self, recv_window: u64) -> Self {
        self.recv_window = recv_window;
        self
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn recv_window(&self) -> u64 {
        self.recv_window
    }

    /// Secret key bytes for HMAC signing. Never log this.
    pub(crate) fn secret_bytes(&self) -> &[u8] {
        self.api_secret.as_bytes()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("recv_window", &self.recv_window)
            .finish()
    }
}
