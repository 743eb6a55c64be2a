//! Alpaca Markets Broker Adapter
//!
//! Implementation of `BrokerPort` for the Alpaca Markets trading API:
//! - Single-shot market order submission, no retries
//! - Bounded request timeout
//! - Paper vs live endpoint awareness for logging

mod adapter;
mod api_types;
mod config;
mod error;
mod http_client;

pub use adapter::AlpacaBrokerAdapter;
pub use config::{AlpacaConfig, LIVE_BASE_URL, PAPER_BASE_URL};
pub use error::AlpacaError;
