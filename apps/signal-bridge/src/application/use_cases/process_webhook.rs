//! Process Webhook Use Case
//!
//! Normalizer followed by dispatcher: the whole life of one alert.

use std::sync::Arc;

use crate::application::outcome::ResponseOutcome;
use crate::application::ports::BrokerPort;
use crate::application::use_cases::{DispatchOrderUseCase, NormalizeSignalUseCase};

/// Use case for processing one webhook delivery end to end.
pub struct ProcessWebhookUseCase<B>
where
    B: BrokerPort,
{
    normalizer: NormalizeSignalUseCase,
    dispatcher: DispatchOrderUseCase<B>,
}

impl<B> ProcessWebhookUseCase<B>
where
    B: BrokerPort,
{
    /// Create a new `ProcessWebhookUseCase`.
    pub const fn new(broker: Arc<B>) -> Self {
        Self {
            normalizer: NormalizeSignalUseCase::new(),
            dispatcher: DispatchOrderUseCase::new(broker),
        }
    }

    /// Process a raw body into its terminal outcome.
    pub async fn execute(&self, body: &str) -> ResponseOutcome {
        match self.normalizer.execute(body) {
            Ok(intent) => self.dispatcher.execute(intent).await,
            Err(outcome) => outcome,
        }
    }
}

impl<B> Clone for ProcessWebhookUseCase<B>
where
    B: BrokerPort,
{
    fn clone(&self) -> Self {
        Self {
            normalizer: self.normalizer,
            dispatcher: self.dispatcher.clone(),
        }
    }
}
