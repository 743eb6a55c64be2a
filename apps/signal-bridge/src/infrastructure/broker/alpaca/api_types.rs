//! Alpaca API request and response types.
//!
//! These types map directly to Alpaca's REST API format.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::order_execution::OrderRequest;

/// Order request for Alpaca API.
#[derive(Debug, Clone, Serialize)]
pub struct AlpacaOrderRequest {
    /// Ticker symbol.
    pub symbol: String,
    /// Quantity, sent as a JSON integer.
    pub qty: u64,
    /// Order side.
    pub side: &'static str,
    /// Order type.
    #[serde(rename = "type")]
    pub order_type: &'static str,
    /// Time in force.
    pub time_in_force: &'static str,
}

impl From<&OrderRequest> for AlpacaOrderRequest {
    fn from(request: &OrderRequest) -> Self {
        Self {
            symbol: request.symbol().as_str().to_string(),
            qty: request.quantity(),
            side: request.side().as_str(),
            order_type: request.order_type().as_str(),
            time_in_force: request.time_in_force().as_str(),
        }
    }
}

/// Error response from Alpaca API.
#[derive(Debug, Clone, Deserialize)]
pub struct AlpacaErrorResponse {
    /// Error code, numeric on most endpoints.
    #[serde(default)]
    pub code: Option<Value>,
    /// Error message.
    pub message: String,
}

impl AlpacaErrorResponse {
    /// Parse an error body, if it has Alpaca's error shape.
    #[must_use]
    pub fn parse(body: &str) -> Option<Self> {
        serde_json::from_str(body).ok()
    }
}
