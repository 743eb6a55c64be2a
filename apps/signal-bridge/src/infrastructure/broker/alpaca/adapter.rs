//! Alpaca broker adapter implementing BrokerPort.

use std::time::Instant;

use async_trait::async_trait;

use crate::application::ports::{BrokerError, BrokerPort, BrokerResponse};
use crate::domain::order_execution::OrderRequest;
use crate::infrastructure::metrics;

use super::api_types::{AlpacaErrorResponse, AlpacaOrderRequest};
use super::config::AlpacaConfig;
use super::error::AlpacaError;
use super::http_client::AlpacaHttpClient;

/// Alpaca Markets broker adapter.
///
/// Implements `BrokerPort` for the Alpaca Markets API.
#[derive(Debug, Clone)]
pub struct AlpacaBrokerAdapter {
    client: AlpacaHttpClient,
    live: bool,
}

impl AlpacaBrokerAdapter {
    /// Create a new Alpaca broker adapter.
    pub fn new(config: &AlpacaConfig) -> Result<Self, AlpacaError> {
        let client = AlpacaHttpClient::new(config)?;
        Ok(Self {
            client,
            live: config.is_live(),
        })
    }

    /// Check if we're in live trading mode.
    #[must_use]
    pub const fn is_live(&self) -> bool {
        self.live
    }
}

#[async_trait]
impl BrokerPort for AlpacaBrokerAdapter {
    async fn submit_order(&self, request: &OrderRequest) -> Result<BrokerResponse, BrokerError> {
        if self.is_live() {
            tracing::warn!(
                symbol = %request.symbol(),
                "Submitting LIVE order - this will execute real trades"
            );
        }

        let alpaca_request = AlpacaOrderRequest::from(request);

        tracing::info!(
            symbol = %alpaca_request.symbol,
            side = alpaca_request.side,
            order_type = alpaca_request.order_type,
            time_in_force = alpaca_request.time_in_force,
            qty = alpaca_request.qty,
            "Submitting order to Alpaca"
        );

        let started = Instant::now();
        let result = self.client.post_order(&alpaca_request).await;
        metrics::record_order_latency(started.elapsed());

        match result {
            Ok(response) => {
                tracing::info!(
                    symbol = %alpaca_request.symbol,
                    status = response.status,
                    broker_order_id = response.body.get("id").and_then(|v| v.as_str()),
                    "Order submitted successfully"
                );
                Ok(BrokerResponse {
                    status: response.status,
                    body: response.body,
                })
            }
            Err(err) => {
                if let AlpacaError::Api { status, body } = &err {
                    let message = AlpacaErrorResponse::parse(body).map(|e| e.message);
                    tracing::warn!(
                        symbol = %alpaca_request.symbol,
                        status,
                        message = message.as_deref(),
                        "Alpaca rejected order"
                    );
                }
                Err(BrokerError::from(err))
            }
        }
    }
}
