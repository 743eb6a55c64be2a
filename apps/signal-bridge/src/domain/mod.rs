//! Domain Layer
//!
//! The innermost layer containing the bridge's decision logic with no
//! infrastructure dependencies.
//!
//! # Bounded Contexts
//!
//! - [`signal`]: Inbound alert payloads and their validation into a `TradeIntent`
//! - [`order_execution`]: Market order request derivation (side, type, time in force)
//! - [`shared`]: Value objects used by both contexts

pub mod order_execution;
pub mod shared;
pub mod signal;
