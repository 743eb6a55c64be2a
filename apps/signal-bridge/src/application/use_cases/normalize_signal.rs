//! Normalize Signal Use Case
//!
//! Turns a raw alert body into a [`TradeIntent`] or a terminal outcome.

use serde_json::Value;

use crate::application::outcome::ResponseOutcome;
use crate::domain::signal::{IgnoreReason, RejectReason, SignalRejection, TradeIntent};

/// Use case for normalizing inbound alert bodies.
///
/// Stateless; one instance can serve every request.
#[derive(Debug, Clone, Copy, Default)]
pub struct NormalizeSignalUseCase;

impl NormalizeSignalUseCase {
    /// Create a new `NormalizeSignalUseCase`.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Normalize a raw body.
    ///
    /// Produces exactly one of a trade intent or an `Ignored`/`Rejected`
    /// outcome, checking in order: empty body, non-JSON text, JSON syntax,
    /// action, symbol, quantity.
    pub fn execute(&self, body: &str) -> Result<TradeIntent, ResponseOutcome> {
        tracing::debug!(body = %body, "Received alert body");

        let trimmed = body.trim();

        // 1. Heartbeats and empty deliveries
        if trimmed.is_empty() {
            return Err(Self::finish(IgnoreReason::EmptyBody.into()));
        }

        // 2. Plain-text status messages
        if !trimmed.starts_with('{') {
            return Err(Self::finish(
                IgnoreReason::NonJsonText {
                    received: body.to_string(),
                }
                .into(),
            ));
        }

        // 3. Strict JSON parse
        let payload: Value = match serde_json::from_str(trimmed) {
            Ok(payload) => payload,
            Err(e) => {
                return Err(Self::finish(
                    RejectReason::InvalidJson {
                        details: e.to_string(),
                    }
                    .into(),
                ));
            }
        };

        // 4. Field validation
        match TradeIntent::from_payload(&payload) {
            Ok(intent) => {
                tracing::info!(
                    action = %intent.action(),
                    symbol = %intent.symbol(),
                    qty = intent.quantity(),
                    "Alert normalized"
                );
                Ok(intent)
            }
            Err(rejection) => Err(Self::finish(rejection)),
        }
    }

    fn finish(rejection: SignalRejection) -> ResponseOutcome {
        match &rejection {
            SignalRejection::Ignored(reason) => {
                tracing::info!(reason = reason.as_str(), "Alert ignored");
            }
            SignalRejection::Rejected(reason) => {
                tracing::warn!(
                    reason = reason.as_str(),
                    detail = %reason.detail(),
                    "Alert rejected"
                );
            }
        }
        rejection.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order_execution::OrderSide;
    use serde_json::json;
    use test_case::test_case;

    fn normalize(body: &str) -> Result<TradeIntent, ResponseOutcome> {
        NormalizeSignalUseCase::new().execute(body)
    }

    #[test_case(""; "empty")]
    #[test_case("   "; "spaces")]
    #[test_case("\n\t\r\n"; "mixed whitespace")]
    fn empty_body_is_ignored(body: &str) {
        assert_eq!(
            normalize(body).unwrap_err(),
            ResponseOutcome::Ignored {
                reason: IgnoreReason::EmptyBody
            }
        );
    }

    #[test_case("Strategy started"; "status text")]
    #[test_case("  ping"; "leading spaces")]
    #[test_case("[1,2,3]"; "json array")]
    fn non_json_text_is_ignored_and_echoed(body: &str) {
        assert_eq!(
            normalize(body).unwrap_err(),
            ResponseOutcome::Ignored {
                reason: IgnoreReason::NonJsonText {
                    received: body.to_string()
                }
            }
        );
    }

    #[test_case(r#"{"action":"#; "truncated")]
    #[test_case(r#"{"action":"buy",}"#; "trailing comma")]
    #[test_case(r#"{"action":"buy"} extra"#; "trailing characters")]
    fn malformed_json_is_rejected(body: &str) {
        let outcome = normalize(body).unwrap_err();
        assert_eq!(outcome.http_status(), 400);
        assert!(matches!(
            outcome,
            ResponseOutcome::Rejected {
                reason: RejectReason::InvalidJson { .. }
            }
        ));
    }

    #[test]
    fn invalid_action_is_rejected() {
        let outcome = normalize(r#"{"action":"hold","symbol":"SPY","qty":1}"#).unwrap_err();
        assert_eq!(
            outcome,
            ResponseOutcome::Rejected {
                reason: RejectReason::InvalidAction {
                    received_action: "hold".to_string()
                }
            }
        );
    }

    #[test]
    fn placeholder_symbol_is_ignored() {
        let outcome = normalize(r#"{"action":"sell","symbol":"{{ticker}}","qty":1}"#).unwrap_err();
        assert_eq!(
            outcome,
            ResponseOutcome::Ignored {
                reason: IgnoreReason::PlaceholderSymbol {
                    symbol: "{{TICKER}}".to_string()
                }
            }
        );
    }

    #[test]
    fn invalid_quantity_echoes_raw_value() {
        let outcome = normalize(r#"{"action":"buy","symbol":"SPY","qty":true}"#).unwrap_err();
        assert_eq!(
            outcome,
            ResponseOutcome::Rejected {
                reason: RejectReason::InvalidQuantity {
                    received_qty: json!(true)
                }
            }
        );
    }

    #[test]
    fn valid_alert_with_surrounding_whitespace() {
        let intent = normalize("\n  {\"action\":\"BUY\",\"symbol\":\"spy\",\"qty\":\"5\"}  \n").unwrap();
        assert_eq!(intent.action(), OrderSide::Buy);
        assert_eq!(intent.symbol().as_str(), "SPY");
        assert_eq!(intent.quantity(), 5);
    }

    #[test]
    fn float_quantity_is_truncated() {
        let intent = normalize(r#"{"action":"sell","symbol":"AAPL","qty":10.7}"#).unwrap();
        assert_eq!(intent.quantity(), 10);
    }
}
