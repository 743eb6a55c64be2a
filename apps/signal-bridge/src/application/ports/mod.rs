//! Application Ports (Driven)
//!
//! Ports define interfaces for the external systems the bridge calls out to.

mod broker_port;

#[cfg(test)]
pub use broker_port::MockBrokerPort;
pub use broker_port::{BrokerError, BrokerPort, BrokerResponse};
