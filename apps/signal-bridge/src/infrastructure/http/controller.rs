//! HTTP Controller (Driver Adapter)
//!
//! Axum-based API that delegates alert handling to the webhook use case.

use std::sync::Arc;

use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing::Instrument;
use uuid::Uuid;

use crate::application::ports::BrokerPort;
use crate::application::use_cases::ProcessWebhookUseCase;
use crate::application::{OutcomeClass, ResponseOutcome};
use crate::infrastructure::config::BridgeConfig;
use crate::infrastructure::metrics;

use super::response::{CheckEnvResponse, RootResponse, WebhookResponse};

/// Application state shared across handlers.
pub struct AppState<B>
where
    B: BrokerPort,
{
    /// Use case for processing alerts.
    pub process_webhook: Arc<ProcessWebhookUseCase<B>>,
    /// Configuration loaded at startup.
    pub config: Arc<BridgeConfig>,
}

impl<B> AppState<B>
where
    B: BrokerPort,
{
    /// Wire the state from a broker and the loaded configuration.
    pub fn new(broker: Arc<B>, config: Arc<BridgeConfig>) -> Self {
        Self {
            process_webhook: Arc::new(ProcessWebhookUseCase::new(broker)),
            config,
        }
    }
}

impl<B> Clone for AppState<B>
where
    B: BrokerPort,
{
    fn clone(&self) -> Self {
        Self {
            process_webhook: Arc::clone(&self.process_webhook),
            config: Arc::clone(&self.config),
        }
    }
}

/// Create the HTTP router with all endpoints.
pub fn create_router<B>(state: AppState<B>) -> Router
where
    B: BrokerPort + 'static,
{
    Router::new()
        .route("/", get(root))
        .route("/check-env", get(check_env))
        .route("/tv-webhook", post(tv_webhook))
        .route("/metrics", get(metrics_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Root status endpoint.
async fn root() -> impl IntoResponse {
    Json(RootResponse::default())
}

/// Configuration report endpoint.
async fn check_env<B>(State(state): State<AppState<B>>) -> impl IntoResponse
where
    B: BrokerPort,
{
    Json(CheckEnvResponse {
        apca_api_key_id_set: state.config.credentials.has_api_key(),
        apca_api_secret_key_set: state.config.credentials.has_api_secret(),
        apca_base_url: state.config.alpaca.base_url.clone(),
    })
}

/// Alert webhook endpoint.
///
/// The body is read raw, whatever the `Content-Type`.
async fn tv_webhook<B>(State(state): State<AppState<B>>, body: Bytes) -> impl IntoResponse
where
    B: BrokerPort + 'static,
{
    let request_id = Uuid::new_v4();
    let span = tracing::info_span!("webhook", %request_id);

    let outcome = async {
        let text = String::from_utf8_lossy(&body);
        let outcome = state.process_webhook.execute(&text).await;
        tracing::info!(
            outcome = outcome.label(),
            status = outcome.http_status(),
            symbol = outcome.intent().map(|intent| intent.symbol().as_str()),
            "Webhook handled"
        );
        outcome
    }
    .instrument(span)
    .await;

    metrics::record_webhook(&outcome);

    (status_code(&outcome), Json(WebhookResponse::from(&outcome)))
}

/// Prometheus exposition endpoint.
async fn metrics_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        [("content-type", "text/plain; version=0.0.4; charset=utf-8")],
        metrics::render(),
    )
}

const fn status_code(outcome: &ResponseOutcome) -> StatusCode {
    match outcome.class() {
        OutcomeClass::Success => StatusCode::OK,
        OutcomeClass::ClientError => StatusCode::BAD_REQUEST,
        OutcomeClass::UpstreamError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
