//! Dispatch Order Use Case
//!
//! Routes a validated intent to the broker, or logs it when the symbol is
//! crypto-classified.

use std::sync::Arc;

use crate::application::outcome::ResponseOutcome;
use crate::application::ports::BrokerPort;
use crate::domain::order_execution::OrderRequest;
use crate::domain::signal::TradeIntent;

/// Use case for dispatching trade intents as market orders.
pub struct DispatchOrderUseCase<B>
where
    B: BrokerPort,
{
    broker: Arc<B>,
}

impl<B> DispatchOrderUseCase<B>
where
    B: BrokerPort,
{
    /// Create a new `DispatchOrderUseCase`.
    pub const fn new(broker: Arc<B>) -> Self {
        Self { broker }
    }

    /// Dispatch an intent.
    ///
    /// Never fails: broker errors become [`ResponseOutcome::OrderFailed`].
    pub async fn execute(&self, intent: TradeIntent) -> ResponseOutcome {
        if intent.symbol().is_crypto() {
            tracing::info!(
                action = %intent.action(),
                symbol = %intent.symbol(),
                qty = intent.quantity(),
                "Crypto signal logged, not executed"
            );
            return ResponseOutcome::CryptoLogged { intent };
        }

        let request = OrderRequest::from_intent(&intent);
        tracing::info!(
            symbol = %request.symbol(),
            qty = request.quantity(),
            side = request.side().as_str(),
            order_type = request.order_type().as_str(),
            time_in_force = request.time_in_force().as_str(),
            "Submitting order"
        );

        match self.broker.submit_order(&request).await {
            Ok(response) => {
                tracing::info!(
                    status = response.status,
                    body = %response.body,
                    "Order accepted"
                );
                ResponseOutcome::OrderPlaced {
                    intent,
                    broker_response: response.body,
                }
            }
            Err(e) => {
                tracing::error!(
                    symbol = %intent.symbol(),
                    status = ?e.status(),
                    error = %e,
                    "Order failed"
                );
                ResponseOutcome::OrderFailed {
                    intent,
                    detail: e.to_string(),
                }
            }
        }
    }
}

impl<B> Clone for DispatchOrderUseCase<B>
where
    B: BrokerPort,
{
    fn clone(&self) -> Self {
        Self {
            broker: Arc::clone(&self.broker),
        }
    }
}
