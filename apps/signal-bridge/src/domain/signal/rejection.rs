//! Classified reasons for not turning an alert into an order.

use serde_json::Value;
use thiserror::Error;

/// Why an alert was acknowledged without acting on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The body was empty or whitespace-only.
    EmptyBody,
    /// The body was plain text (status or heartbeat message), not a JSON object.
    NonJsonText {
        /// The body as received, untrimmed.
        received: String,
    },
    /// The symbol was empty or the unsubstituted ticker template.
    PlaceholderSymbol {
        /// The normalized symbol that was received.
        symbol: String,
    },
}

impl IgnoreReason {
    /// Machine-readable reason string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::EmptyBody => "empty body",
            Self::NonJsonText { .. } => "non-json text",
            Self::PlaceholderSymbol { .. } => "placeholder or empty symbol",
        }
    }
}

/// Why an alert was refused as a client input error.
#[derive(Debug, Clone, PartialEq)]
pub enum RejectReason {
    /// The body looked like JSON but did not parse.
    InvalidJson {
        /// Parser error message.
        details: String,
    },
    /// The action was not "buy" or "sell".
    InvalidAction {
        /// The lowercased action that was received.
        received_action: String,
    },
    /// The quantity did not coerce to a positive integer.
    InvalidQuantity {
        /// The raw `qty` value from the payload.
        received_qty: Value,
    },
}

impl RejectReason {
    /// Machine-readable reason string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidJson { .. } => "invalid json",
            Self::InvalidAction { .. } => "invalid action",
            Self::InvalidQuantity { .. } => "invalid quantity",
        }
    }

    /// The offending input, echoed back to the caller.
    #[must_use]
    pub fn detail(&self) -> Value {
        match self {
            Self::InvalidJson { details } => Value::String(details.clone()),
            Self::InvalidAction { received_action } => Value::String(received_action.clone()),
            Self::InvalidQuantity { received_qty } => received_qty.clone(),
        }
    }
}

/// Terminal classification of an alert that does not become a trade intent.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SignalRejection {
    /// Acknowledged, nothing to do.
    #[error("signal ignored: {}", .0.as_str())]
    Ignored(IgnoreReason),

    /// Client input error.
    #[error("signal rejected: {}", .0.as_str())]
    Rejected(RejectReason),
}

impl SignalRejection {
    /// Machine-readable reason string of the underlying classification.
    #[must_use]
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::Ignored(reason) => reason.as_str(),
            Self::Rejected(reason) => reason.as_str(),
        }
    }
}

impl From<IgnoreReason> for SignalRejection {
    fn from(reason: IgnoreReason) -> Self {
        Self::Ignored(reason)
    }
}

impl From<RejectReason> for SignalRejection {
    fn from(reason: RejectReason) -> Self {
        Self::Rejected(reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn ignore_reason_strings() {
        assert_eq!(IgnoreReason::EmptyBody.as_str(), "empty body");
        assert_eq!(
            IgnoreReason::NonJsonText {
                received: "ok".to_string()
            }
            .as_str(),
            "non-json text"
        );
        assert_eq!(
            IgnoreReason::PlaceholderSymbol {
                symbol: String::new()
            }
            .as_str(),
            "placeholder or empty symbol"
        );
    }

    #[test]
    fn reject_reason_detail_echoes_input() {
        let reason = RejectReason::InvalidQuantity {
            received_qty: json!([1, 2]),
        };
        assert_eq!(reason.as_str(), "invalid quantity");
        assert_eq!(reason.detail(), json!([1, 2]));

        let reason = RejectReason::InvalidAction {
            received_action: "hold".to_string(),
        };
        assert_eq!(reason.detail(), json!("hold"));
    }

    #[test]
    fn rejection_display() {
        let rejection = SignalRejection::from(RejectReason::InvalidJson {
            details: "EOF".to_string(),
        });
        assert_eq!(rejection.to_string(), "signal rejected: invalid json");

        let rejection = SignalRejection::from(IgnoreReason::EmptyBody);
        assert_eq!(rejection.to_string(), "signal ignored: empty body");
    }
}
