//! Signal Bounded Context
//!
//! Turns an untrusted alert payload into a validated [`TradeIntent`], or into a
//! classified [`SignalRejection`] explaining why no order should be placed.
//!
//! Rejections come in two flavours:
//!
//! - **Ignored**: not an error (heartbeats, template alerts). Acknowledged so the
//!   alerting service does not treat the delivery as failed and retry it.
//! - **Rejected**: the alert is malformed and the caller should fix its configuration.

mod intent;
mod quantity;
mod rejection;

pub use intent::TradeIntent;
pub use quantity::coerce_quantity;
pub use rejection::{IgnoreReason, RejectReason, SignalRejection};
