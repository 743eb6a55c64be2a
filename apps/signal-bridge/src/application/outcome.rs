//! Result of one webhook invocation.
//!
//! A [`ResponseOutcome`] is produced exactly once per request and lives only
//! until the HTTP response is written.

use serde_json::Value;

use crate::domain::signal::{IgnoreReason, RejectReason, SignalRejection, TradeIntent};

/// Note attached to crypto signals, which are logged but never sent.
pub const CRYPTO_NOTE: &str =
    "Crypto orders require account approval. Signal logged but not executed.";

/// Terminal state of a webhook request.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseOutcome {
    /// Non-actionable input, acknowledged as success.
    Ignored {
        /// Why nothing was done.
        reason: IgnoreReason,
    },
    /// Client input error.
    Rejected {
        /// What was wrong, with the offending value.
        reason: RejectReason,
    },
    /// Crypto signal, logged only.
    CryptoLogged {
        /// The validated intent.
        intent: TradeIntent,
    },
    /// Broker accepted the order.
    OrderPlaced {
        /// The validated intent.
        intent: TradeIntent,
        /// Parsed broker response body.
        broker_response: Value,
    },
    /// Broker refused the order or could not be reached.
    OrderFailed {
        /// The validated intent.
        intent: TradeIntent,
        /// Upstream status and body, or the transport error message.
        detail: String,
    },
}

/// Error taxonomy bucket of an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeClass {
    /// Ignored, crypto-logged or placed.
    Success,
    /// Malformed alert.
    ClientError,
    /// Brokerage failure.
    UpstreamError,
}

impl OutcomeClass {
    /// HTTP status code returned to the webhook caller.
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        match self {
            Self::Success => 200,
            Self::ClientError => 400,
            Self::UpstreamError => 500,
        }
    }
}

impl ResponseOutcome {
    /// Taxonomy bucket.
    #[must_use]
    pub const fn class(&self) -> OutcomeClass {
        match self {
            Self::Ignored { .. } | Self::CryptoLogged { .. } | Self::OrderPlaced { .. } => {
                OutcomeClass::Success
            }
            Self::Rejected { .. } => OutcomeClass::ClientError,
            Self::OrderFailed { .. } => OutcomeClass::UpstreamError,
        }
    }

    /// HTTP status code returned to the webhook caller.
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.class().http_status()
    }

    /// Short label for logs and metrics.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Ignored { .. } => "ignored",
            Self::Rejected { .. } => "rejected",
            Self::CryptoLogged { .. } => "crypto_logged",
            Self::OrderPlaced { .. } => "order_placed",
            Self::OrderFailed { .. } => "order_failed",
        }
    }

    /// The trade intent, for outcomes that got past validation.
    #[must_use]
    pub const fn intent(&self) -> Option<&TradeIntent> {
        match self {
            Self::CryptoLogged { intent }
            | Self::OrderPlaced { intent, .. }
            | Self::OrderFailed { intent, .. } => Some(intent),
            Self::Ignored { .. } | Self::Rejected { .. } => None,
        }
    }
}

impl From<SignalRejection> for ResponseOutcome {
    fn from(rejection: SignalRejection) -> Self {
        match rejection {
            SignalRejection::Ignored(reason) => Self::Ignored { reason },
            SignalRejection::Rejected(reason) => Self::Rejected { reason },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order_execution::OrderSide;
    use crate::domain::shared::Symbol;

    fn intent() -> TradeIntent {
        TradeIntent::try_new(OrderSide::Buy, Symbol::new("SPY"), 5).unwrap()
    }

    #[test]
    fn status_codes_follow_taxonomy() {
        let ignored = ResponseOutcome::Ignored {
            reason: IgnoreReason::EmptyBody,
        };
        let rejected = ResponseOutcome::Rejected {
            reason: RejectReason::InvalidJson {
                details: "EOF".to_string(),
            },
        };
        let crypto = ResponseOutcome::CryptoLogged { intent: intent() };
        let placed = ResponseOutcome::OrderPlaced {
            intent: intent(),
            broker_response: Value::Null,
        };
        let failed = ResponseOutcome::OrderFailed {
            intent: intent(),
            detail: "boom".to_string(),
        };

        assert_eq!(ignored.http_status(), 200);
        assert_eq!(crypto.http_status(), 200);
        assert_eq!(placed.http_status(), 200);
        assert_eq!(rejected.http_status(), 400);
        assert_eq!(failed.http_status(), 500);
    }

    #[test]
    fn intent_only_after_validation() {
        let ignored = ResponseOutcome::Ignored {
            reason: IgnoreReason::EmptyBody,
        };
        assert!(ignored.intent().is_none());

        let crypto = ResponseOutcome::CryptoLogged { intent: intent() };
        assert_eq!(crypto.intent(), Some(&intent()));
        assert_eq!(crypto.label(), "crypto_logged");
    }

    #[test]
    fn from_rejection() {
        let outcome = ResponseOutcome::from(SignalRejection::Ignored(IgnoreReason::EmptyBody));
        assert_eq!(outcome.class(), OutcomeClass::Success);
        assert_eq!(outcome.label(), "ignored");
    }
}
