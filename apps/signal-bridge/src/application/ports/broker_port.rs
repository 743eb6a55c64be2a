//! Broker Port (Driven Port)
//!
//! Interface for submitting orders to a brokerage.

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::order_execution::OrderRequest;

/// Broker reply to an accepted order submission.
#[derive(Debug, Clone, PartialEq)]
pub struct BrokerResponse {
    /// HTTP status the broker answered with (200 or 201).
    pub status: u16,
    /// Parsed response body, passed through to the caller untouched.
    pub body: Value,
}

/// Broker port error.
///
/// Every way an order submission can fail. Callers convert these into an
/// order-failed outcome; nothing is retried.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BrokerError {
    /// Broker answered with a status other than 200/201.
    #[error("Alpaca order failed (status {status}): {body}")]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Response body, verbatim.
        body: String,
    },

    /// Request never produced a response (connect error, timeout, body read).
    #[error("Alpaca request failed: {0}")]
    Transport(String),

    /// Broker accepted the order but the body was not JSON.
    #[error("Alpaca response was not valid JSON: {0}")]
    MalformedResponse(String),
}

impl BrokerError {
    /// Upstream HTTP status, if the broker answered at all.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            Self::Transport(_) | Self::MalformedResponse(_) => None,
        }
    }
}

/// Port for broker interactions.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BrokerPort: Send + Sync {
    /// Submit a market order to the broker.
    async fn submit_order(&self, request: &OrderRequest) -> Result<BrokerResponse, BrokerError>;
}
