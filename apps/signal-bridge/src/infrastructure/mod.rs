//! Infrastructure Layer
//!
//! Adapters for the outside world: the Alpaca broker client, the HTTP
//! driver, configuration, metrics and tracing setup.

pub mod broker;
pub mod config;
pub mod http;
pub mod metrics;
pub mod telemetry;
