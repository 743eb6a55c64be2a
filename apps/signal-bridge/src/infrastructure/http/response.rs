//! HTTP response DTOs.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::application::ResponseOutcome;
use crate::application::outcome::CRYPTO_NOTE;
use crate::domain::signal::{IgnoreReason, RejectReason, TradeIntent};

/// Paths advertised by the root endpoint.
pub const ENDPOINTS: [&str; 4] = ["/", "/check-env", "/tv-webhook", "/metrics"];

/// Root status response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RootResponse {
    /// Always "running".
    pub status: String,
    /// Human-readable banner.
    pub message: String,
    /// Available paths.
    pub endpoints: Vec<String>,
}

impl Default for RootResponse {
    fn default() -> Self {
        Self {
            status: "running".to_string(),
            message: "Alpaca Bridge API is active".to_string(),
            endpoints: ENDPOINTS.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Configuration report. Never includes secret values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckEnvResponse {
    /// Whether `APCA_API_KEY_ID` is set and non-empty.
    pub apca_api_key_id_set: bool,
    /// Whether `APCA_API_SECRET_KEY` is set and non-empty.
    pub apca_api_secret_key_set: bool,
    /// Effective brokerage base URL.
    pub apca_base_url: String,
}

/// Webhook response body.
///
/// One flat shape covers every outcome; absent fields are omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct WebhookResponse {
    /// "ignored", "error", "crypto_signal_logged" or "order_sent".
    pub status: String,
    /// Machine-readable reason.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Non-JSON body as received.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub received: Option<String>,
    /// Parser or upstream error detail.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Rejected action, lowercased.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub received_action: Option<String>,
    /// Rejected quantity, raw.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub received_qty: Option<Value>,
    /// Order side.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    /// Normalized symbol.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    /// Share count.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qty: Option<u64>,
    /// Crypto notice.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Broker response body, passed through.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alpaca_response: Option<Value>,
}

impl WebhookResponse {
    fn with_status(status: &str) -> Self {
        Self {
            status: status.to_string(),
            ..Self::default()
        }
    }

    fn with_intent(mut self, intent: &TradeIntent) -> Self {
        self.action = Some(intent.action().as_str().to_string());
        self.symbol = Some(intent.symbol().as_str().to_string());
        self.qty = Some(intent.quantity());
        self
    }
}

impl From<&ResponseOutcome> for WebhookResponse {
    fn from(outcome: &ResponseOutcome) -> Self {
        match outcome {
            ResponseOutcome::Ignored { reason } => {
                let mut body = Self::with_status("ignored");
                body.reason = Some(reason.as_str().to_string());
                match reason {
                    IgnoreReason::EmptyBody => {}
                    IgnoreReason::NonJsonText { received } => {
                        body.received = Some(received.clone());
                    }
                    IgnoreReason::PlaceholderSymbol { symbol } => {
                        body.symbol = Some(symbol.clone());
                    }
                }
                body
            }
            ResponseOutcome::Rejected { reason } => {
                let mut body = Self::with_status("error");
                body.reason = Some(reason.as_str().to_string());
                match reason {
                    RejectReason::InvalidJson { details } => {
                        body.details = Some(details.clone());
                    }
                    RejectReason::InvalidAction { received_action } => {
                        body.received_action = Some(received_action.clone());
                    }
                    RejectReason::InvalidQuantity { received_qty } => {
                        body.received_qty = Some(received_qty.clone());
                    }
                }
                body
            }
            ResponseOutcome::CryptoLogged { intent } => {
                let mut body = Self::with_status("crypto_signal_logged").with_intent(intent);
                body.note = Some(CRYPTO_NOTE.to_string());
                body
            }
            ResponseOutcome::OrderPlaced {
                intent,
                broker_response,
            } => {
                let mut body = Self::with_status("order_sent").with_intent(intent);
                body.alpaca_response = Some(broker_response.clone());
                body
            }
            ResponseOutcome::OrderFailed { intent, detail } => {
                let mut body = Self::with_status("error").with_intent(intent);
                body.reason = Some("alpaca_order_failed".to_string());
                body.details = Some(detail.clone());
                body
            }
        }
    }
}
