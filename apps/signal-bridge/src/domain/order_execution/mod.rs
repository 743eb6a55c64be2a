//! Order Execution Bounded Context
//!
//! Derives the market order sent to the broker from a validated trade intent.
//!
//! # Key Concepts
//!
//! - **Order Request**: Symbol, quantity, side, market type and time in force
//! - **Time in Force**: Good-til-canceled for crypto pairs, day for everything else

mod order_request;
pub mod value_objects;

pub use order_request::OrderRequest;
pub use value_objects::{OrderSide, OrderType, TimeInForce};
