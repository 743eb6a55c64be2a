//! Application Use Cases
//!
//! Use cases orchestrate domain logic to fulfill application requirements.

mod dispatch_order;
mod normalize_signal;
mod process_webhook;

pub use dispatch_order::DispatchOrderUseCase;
pub use normalize_signal::NormalizeSignalUseCase;
pub use process_webhook::ProcessWebhookUseCase;
