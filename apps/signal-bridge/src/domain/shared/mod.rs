//! Shared Domain Types
//!
//! Value objects shared across bounded contexts.

mod symbol;

pub use symbol::{Symbol, TICKER_PLACEHOLDER};
