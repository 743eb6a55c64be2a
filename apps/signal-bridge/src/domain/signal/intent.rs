//! Trade intent extracted from an alert payload.

use serde::Serialize;
use serde_json::Value;

use super::quantity::coerce_quantity;
use super::rejection::{IgnoreReason, RejectReason, SignalRejection};
use crate::domain::order_execution::OrderSide;
use crate::domain::shared::Symbol;

/// A validated request to trade, derived from an alert.
///
/// Fields are private: a `TradeIntent` only exists once action, symbol and
/// quantity have all passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TradeIntent {
    action: OrderSide,
    symbol: Symbol,
    #[serde(rename = "qty")]
    quantity: u64,
}

impl TradeIntent {
    /// Build an intent from already-typed parts.
    ///
    /// # Errors
    ///
    /// Returns a rejection if the symbol is empty/placeholder or the quantity is zero.
    pub fn try_new(
        action: OrderSide,
        symbol: Symbol,
        quantity: u64,
    ) -> Result<Self, SignalRejection> {
        if symbol.is_placeholder_or_empty() {
            return Err(IgnoreReason::PlaceholderSymbol {
                symbol: symbol.into_inner(),
            }
            .into());
        }
        if quantity == 0 {
            return Err(RejectReason::InvalidQuantity {
                received_qty: Value::from(quantity),
            }
            .into());
        }
        Ok(Self {
            action,
            symbol,
            quantity,
        })
    }

    /// Extract and validate an intent from a parsed alert payload.
    ///
    /// Checks run in a fixed order and stop at the first failure:
    /// action, then symbol, then quantity.
    ///
    /// # Errors
    ///
    /// - `Rejected(InvalidAction)` if `action` is not "buy"/"sell" (case-insensitive)
    /// - `Ignored(PlaceholderSymbol)` if `symbol` is empty or `{{TICKER}}`
    /// - `Rejected(InvalidQuantity)` if `qty` is not a positive integer
    pub fn from_payload(payload: &Value) -> Result<Self, SignalRejection> {
        let action = action_field(payload).to_lowercase();
        let Some(side) = OrderSide::from_action(&action) else {
            return Err(RejectReason::InvalidAction {
                received_action: action,
            }
            .into());
        };

        let symbol = Symbol::new(symbol_field(payload));
        if symbol.is_placeholder_or_empty() {
            return Err(IgnoreReason::PlaceholderSymbol {
                symbol: symbol.into_inner(),
            }
            .into());
        }

        let raw_qty = payload.get("qty").cloned().unwrap_or_else(|| Value::from(0));
        let Some(quantity) = coerce_quantity(&raw_qty) else {
            return Err(RejectReason::InvalidQuantity {
                received_qty: raw_qty,
            }
            .into());
        };

        Ok(Self {
            action: side,
            symbol,
            quantity,
        })
    }

    /// Order side.
    #[must_use]
    pub const fn action(&self) -> OrderSide {
        self.action
    }

    /// Normalized symbol.
    #[must_use]
    pub const fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    /// Share (or unit) count, always positive.
    #[must_use]
    pub const fn quantity(&self) -> u64 {
        self.quantity
    }
}

/// `action` as text: absent/null is empty, other non-strings use their JSON text.
fn action_field(payload: &Value) -> String {
    match payload.get("action") {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// `symbol` as text: anything but a string counts as empty.
fn symbol_field(payload: &Value) -> &str {
    payload.get("symbol").and_then(Value::as_str).unwrap_or_default()
}
