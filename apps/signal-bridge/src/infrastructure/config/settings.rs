//! Bridge Configuration Settings
//!
//! Configuration types for the bridge, loaded once from environment variables.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use crate::infrastructure::broker::alpaca::{AlpacaConfig, PAPER_BASE_URL};

/// Default HTTP listen port.
pub const DEFAULT_PORT: u16 = 8000;

/// Default outbound request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Alpaca API credentials.
///
/// Either half may be empty; the bridge still starts and reports the gap
/// through `/check-env`.
#[derive(Clone, Default)]
pub struct Credentials {
    api_key: String,
    api_secret: String,
}

impl Credentials {
    /// Create new credentials.
    #[must_use]
    pub const fn new(api_key: String, api_secret: String) -> Self {
        Self {
            api_key,
            api_secret,
        }
    }

    /// Get the API key.
    #[must_use]
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Get the API secret.
    #[must_use]
    pub fn api_secret(&self) -> &str {
        &self.api_secret
    }

    /// Whether a non-empty key id was provided.
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }

    /// Whether a non-empty secret was provided.
    #[must_use]
    pub fn has_api_secret(&self) -> bool {
        !self.api_secret.is_empty()
    }

    /// Whether both halves were provided.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.has_api_key() && self.has_api_secret()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"[REDACTED]")
            .field("api_secret", &"[REDACTED]")
            .finish()
    }
}

/// Brokerage endpoint settings.
#[derive(Debug, Clone)]
pub struct AlpacaSettings {
    /// Trading API base URL, without trailing slash.
    pub base_url: String,
    /// Outbound request timeout.
    pub timeout: Duration,
}

impl Default for AlpacaSettings {
    fn default() -> Self {
        Self {
            base_url: PAPER_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// HTTP listener settings.
#[derive(Debug, Clone, Copy)]
pub struct ServerSettings {
    /// Bind address.
    pub host: IpAddr,
    /// Bind port.
    pub port: u16,
}

impl ServerSettings {
    /// Socket address to bind.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
        }
    }
}

/// Complete bridge configuration.
#[derive(Debug, Clone, Default)]
pub struct BridgeConfig {
    /// API credentials.
    pub credentials: Credentials,
    /// Brokerage endpoint settings.
    pub alpaca: AlpacaSettings,
    /// HTTP listener settings.
    pub server: ServerSettings,
}

impl BridgeConfig {
    /// Create configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `BRIDGE_HOST` or `BRIDGE_PORT` is set but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if `BRIDGE_HOST` or `BRIDGE_PORT` is set but malformed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let credentials = Credentials::new(
            lookup("APCA_API_KEY_ID").unwrap_or_default(),
            lookup("APCA_API_SECRET_KEY").unwrap_or_default(),
        );

        let base_url = lookup("APCA_BASE_URL")
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| PAPER_BASE_URL.to_string());

        let alpaca = AlpacaSettings {
            base_url,
            timeout: parse_duration_secs(lookup("APCA_TIMEOUT_SECS"), DEFAULT_TIMEOUT),
        };

        let server = ServerSettings {
            host: parse_host(lookup("BRIDGE_HOST"), ServerSettings::default().host)?,
            port: parse_port(lookup("BRIDGE_PORT"), ServerSettings::default().port)?,
        };

        Ok(Self {
            credentials,
            alpaca,
            server,
        })
    }

    /// Build the broker adapter configuration.
    #[must_use]
    pub fn alpaca_config(&self) -> AlpacaConfig {
        AlpacaConfig::new(
            self.credentials.api_key().to_string(),
            self.credentials.api_secret().to_string(),
            self.alpaca.base_url.clone(),
        )
        .with_timeout(self.alpaca.timeout)
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Listen port is not a valid `u16`.
    #[error("invalid BRIDGE_PORT value: {0}")]
    InvalidPort(String),
    /// Listen host is not an IP address.
    #[error("invalid BRIDGE_HOST value: {0}")]
    InvalidHost(String),
}

fn parse_port(value: Option<String>, default: u16) -> Result<u16, ConfigError> {
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(default),
        Some(v) => v.parse().map_err(|_| ConfigError::InvalidPort(v.to_string())),
    }
}

fn parse_host(value: Option<String>, default: IpAddr) -> Result<IpAddr, ConfigError> {
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(default),
        Some(v) => v.parse().map_err(|_| ConfigError::InvalidHost(v.to_string())),
    }
}

fn parse_duration_secs(value: Option<String>, default: Duration) -> Duration {
    value
        .and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|secs| *secs > 0)
        .map_or(default, Duration::from_secs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<BridgeConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        BridgeConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_environment_is_empty() {
        let config = config_from(&[]).unwrap();
        assert!(!config.credentials.has_api_key());
        assert!(!config.credentials.has_api_secret());
        assert_eq!(config.alpaca.base_url, "https://paper-api.alpaca.markets");
        assert_eq!(config.alpaca.timeout, Duration::from_secs(30));
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.server.socket_addr().to_string(), "0.0.0.0:8000");
    }

    #[test]
    fn reads_credentials_and_endpoint() {
        let config = config_from(&[
            ("APCA_API_KEY_ID", "key123"),
            ("APCA_API_SECRET_KEY", "secret456"),
            ("APCA_BASE_URL", "https://api.alpaca.markets/"),
            ("APCA_TIMEOUT_SECS", "5"),
        ])
        .unwrap();
        assert!(config.credentials.is_complete());
        assert_eq!(config.credentials.api_key(), "key123");
        assert_eq!(config.alpaca.base_url, "https://api.alpaca.markets");
        assert_eq!(config.alpaca.timeout, Duration::from_secs(5));
    }

    #[test]
    fn empty_credentials_count_as_unset() {
        let config = config_from(&[("APCA_API_KEY_ID", ""), ("APCA_API_SECRET_KEY", "s")]).unwrap();
        assert!(!config.credentials.has_api_key());
        assert!(config.credentials.has_api_secret());
        assert!(!config.credentials.is_complete());
    }

    #[test]
    fn zero_or_garbage_timeout_falls_back() {
        let zero = config_from(&[("APCA_TIMEOUT_SECS", "0")]).unwrap();
        assert_eq!(zero.alpaca.timeout, DEFAULT_TIMEOUT);
        let garbage = config_from(&[("APCA_TIMEOUT_SECS", "soon")]).unwrap();
        assert_eq!(garbage.alpaca.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn server_overrides() {
        let config = config_from(&[("BRIDGE_HOST", "127.0.0.1"), ("BRIDGE_PORT", "9001")]).unwrap();
        assert_eq!(config.server.socket_addr().to_string(), "127.0.0.1:9001");
    }

    #[test]
    fn malformed_port_is_an_error() {
        let err = config_from(&[("BRIDGE_PORT", "eighty")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort(ref v) if v == "eighty"));
        assert!(config_from(&[("BRIDGE_PORT", "70000")]).is_err());
    }

    #[test]
    fn malformed_host_is_an_error() {
        let err = config_from(&[("BRIDGE_HOST", "localhost")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidHost(_)));
    }

    #[test]
    fn credentials_redacted_debug() {
        let creds = Credentials::new("key123".to_string(), "secret456".to_string());
        let debug = format!("{creds:?}");
        assert!(!debug.contains("key123"));
        assert!(!debug.contains("secret456"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn alpaca_config_carries_settings() {
        let config = config_from(&[
            ("APCA_API_KEY_ID", "k"),
            ("APCA_API_SECRET_KEY", "s"),
            ("APCA_TIMEOUT_SECS", "7"),
        ])
        .unwrap();
        let alpaca = config.alpaca_config();
        assert_eq!(alpaca.api_key, "k");
        assert_eq!(alpaca.api_secret, "s");
        assert_eq!(alpaca.timeout, Duration::from_secs(7));
        assert!(alpaca.is_paper());
    }
}
