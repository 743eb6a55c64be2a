//! Application Layer
//!
//! The application layer orchestrates domain logic through use cases.
//! It defines:
//!
//! - **Ports**: Interfaces for interacting with external systems
//! - **Use Cases**: Normalizer, dispatcher and the webhook pipeline composing them
//! - **Outcome**: The single result artifact of one webhook invocation

pub mod outcome;
pub mod ports;
pub mod use_cases;

pub use outcome::{OutcomeClass, ResponseOutcome};
pub use ports::*;
pub use use_cases::*;
