//! Application configuration.
//!
//! Endpoint settings come from a TOML file; API credentials come from
//! environment variables and are handed to the client as an explicit
//! [`Credentials`] value — no process-wide singletons.

use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use usdm_client::Credentials;

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "USDM_API_KEY";

/// Environment variable holding the API secret.
pub const API_SECRET_ENV: &str = "USDM_API_SECRET";

/// Environment variable overriding the config file path.
pub const CONFIG_ENV: &str = "USDM_CONFIG";

const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Exchange endpoint configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExchangeConfig {
    /// REST base URL.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Receive window tolerance in milliseconds.
    #[serde(default = "default_recv_window")]
    pub recv_window: u64,
}

fn default_base_url() -> String {
    usdm_client::credentials::DEFAULT_BASE_URL.to_string()
}

fn default_recv_window() -> u64 {
    usdm_client::credentials::DEFAULT_RECV_WINDOW_MS
}

impl Default for ExchangeConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            recv_window: default_recv_window(),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Exchange endpoint settings.
    #[serde(default)]
    pub exchange: ExchangeConfig,
}

impl AppConfig {
    /// Load configuration.
    ///
    /// Path precedence: explicit argument > `USDM_CONFIG` env var >
    /// `config/default.toml`. A missing file falls back to defaults.
    pub fn load(path_override: Option<&str>) -> AppResult<Self> {
        let config_path = path_override
            .map(str::to_string)
            .or_else(|| std::env::var(CONFIG_ENV).ok())
            .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

        if Path::new(&config_path).exists() {
            Self::from_file(&config_path)
        } else {
            tracing::warn!(path = %config_path, "Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Load from a specific file.
    pub fn from_file(path: &str) -> AppResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("Failed to read config: {e}")))?;

        toml::from_str(&content)
            .map_err(|e| AppError::Config(format!("Failed to parse config: {e}")))
    }

    /// Build client credentials from the environment plus this config.
    ///
    /// Both `USDM_API_KEY` and `USDM_API_SECRET` must be set and
    /// non-empty; the secret never appears in logs or error messages.
    pub fn credentials(&self) -> AppResult<Credentials> {
        let api_key = read_env(API_KEY_ENV)?;
        let api_secret = read_env(API_SECRET_ENV)?;

        Ok(Credentials::new(api_key, api_secret)
            .with_base_url(self.exchange.base_url.clone())
            .with_recv_window(self.exchange.recv_window))
    }
}

fn read_env(var: &str) -> AppResult<String> {
    match std::env::var(var) {
        Ok(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
        _ => Err(AppError::Credentials(format!(
            "{var} must be set in the environment"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(
            config.exchange.base_url,
            "https://testnet.binancefuture.com"
        );
        assert_eq!(config.exchange.recv_window, 5000);
    }

    #[test]
    fn test_parse_partial_toml() {
        let config: AppConfig = toml::from_str(
            r#"
            [exchange]
            base_url = "https://fapi.example.com"
            "#,
        )
        .unwrap();
        assert_eq!(config.exchange.base_url, "https://fapi.example.com");
        // Unspecified fields fall back to defaults.
        assert_eq!(config.exchange.recv_window, 5000);
    }

    #[test]
    fn test_parse_empty_toml() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.exchange.recv_window, 5000);
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let config = AppConfig::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.exchange.base_url, config.exchange.base_url);
    }
}
