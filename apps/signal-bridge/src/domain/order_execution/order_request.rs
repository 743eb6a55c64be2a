//! Market order request derived from a trade intent.

use super::value_objects::{OrderSide, OrderType, TimeInForce};
use crate::domain::shared::Symbol;
use crate::domain::signal::TradeIntent;

/// Order to submit to the broker.
///
/// Always a market order. Time in force follows the symbol classification:
/// crypto pairs are good-til-canceled, everything else is a day order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRequest {
    symbol: Symbol,
    quantity: u64,
    side: OrderSide,
    order_type: OrderType,
    time_in_force: TimeInForce,
}

impl OrderRequest {
    /// Derive the order for an intent.
    #[must_use]
    pub fn from_intent(intent: &TradeIntent) -> Self {
        let time_in_force = if intent.symbol().is_crypto() {
            TimeInForce::Gtc
        } else {
            TimeInForce::Day
        };

        Self {
            symbol: intent.symbol().clone(),
            quantity: intent.quantity(),
            side: intent.action(),
            order_type: OrderType::Market,
            time_in_force,
        }
    }

    /// Symbol to trade.
    #[must_use]
    pub const fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    /// Quantity.
    #[must_use]
    pub const fn quantity(&self) -> u64 {
        self.quantity
    }

    /// Order side.
    #[must_use]
    pub const fn side(&self) -> OrderSide {
        self.side
    }

    /// Order type.
    #[must_use]
    pub const fn order_type(&self) -> OrderType {
        self.order_type
    }

    /// Time in force.
    #[must_use]
    pub const fn time_in_force(&self) -> TimeInForce {
        self.time_in_force
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn intent(symbol: &str) -> TradeIntent {
        TradeIntent::try_new(OrderSide::Buy, Symbol::new(symbol), 5).unwrap()
    }

    #[test]
    fn equity_order_is_day() {
        let order = OrderRequest::from_intent(&intent("SPY"));
        assert_eq!(order.time_in_force(), TimeInForce::Day);
        assert_eq!(order.order_type(), OrderType::Market);
        assert_eq!(order.side(), OrderSide::Buy);
        assert_eq!(order.quantity(), 5);
        assert_eq!(order.symbol().as_str(), "SPY");
    }

    #[test]
    fn crypto_order_is_gtc() {
        let order = OrderRequest::from_intent(&intent("BTCUSD"));
        assert_eq!(order.time_in_force(), TimeInForce::Gtc);
    }

    #[test]
    fn bare_usd_order_is_day() {
        let order = OrderRequest::from_intent(&intent("USD"));
        assert_eq!(order.time_in_force(), TimeInForce::Day);
    }

    proptest! {
        #[test]
        fn time_in_force_matches_classification(
            symbol in "[A-Za-z]{1,8}(USD|usd)?",
            qty in 1u64..1_000_000,
        ) {
            let intent = TradeIntent::try_new(OrderSide::Sell, Symbol::new(symbol), qty).unwrap();
            let order = OrderRequest::from_intent(&intent);
            prop_assert_eq!(order.time_in_force() == TimeInForce::Gtc, intent.symbol().is_crypto());
            prop_assert_eq!(order.quantity(), qty);
        }
    }
}
