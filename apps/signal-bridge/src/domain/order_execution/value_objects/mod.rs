//! Order Execution Value Objects
//!
//! Immutable types for order requests.

mod order_side;
mod order_type;
mod time_in_force;

pub use order_side::OrderSide;
pub use order_type::OrderType;
pub use time_in_force::TimeInForce;
