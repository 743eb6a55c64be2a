//! Alpaca adapter configuration.

use std::time::Duration;

/// Paper trading API base URL.
pub const PAPER_BASE_URL: &str = "https://paper-api.alpaca.markets";

/// Live trading API base URL.
pub const LIVE_BASE_URL: &str = "https://api.alpaca.markets";

/// Configuration for the Alpaca broker adapter.
#[derive(Clone)]
pub struct AlpacaConfig {
    /// API key.
    pub api_key: String,
    /// API secret.
    pub api_secret: String,
    /// Trading API base URL, without trailing slash.
    pub base_url: String,
    /// HTTP request timeout.
    pub timeout: Duration,
}

impl AlpacaConfig {
    /// Create a new configuration.
    #[must_use]
    pub fn new(api_key: String, api_secret: String, base_url: String) -> Self {
        Self {
            api_key,
            api_secret,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Set the HTTP timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Check if the base URL points at the paper environment.
    #[must_use]
    pub fn is_paper(&self) -> bool {
        self.base_url.contains("paper-api")
    }

    /// Check if the base URL is the live trading endpoint.
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.base_url == LIVE_BASE_URL
    }

    /// Order submission endpoint.
    #[must_use]
    pub fn orders_url(&self) -> String {
        format!("{}/v2/orders", self.base_url)
    }
}

impl std::fmt::Debug for AlpacaConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlpacaConfig")
            .field("api_key", &"[REDACTED]")
            .field("api_secret", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}
