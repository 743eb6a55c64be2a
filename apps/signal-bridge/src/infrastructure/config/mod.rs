//! Configuration Module
//!
//! Configuration loading for the bridge service.

mod settings;

pub use settings::{AlpacaSettings, BridgeConfig, ConfigError, Credentials, ServerSettings};
