//! Prometheus Metrics Module
//!
//! Exposes bridge metrics in Prometheus format for monitoring.
//!
//! # Metrics
//!
//! - **Webhooks**: Inbound alerts by terminal outcome
//! - **Orders**: Dispatch results for validated intents
//! - **Latency**: Round-trip time of order submissions to the broker
//!
//! # Integration
//!
//! Metrics are exposed at `/metrics` on the main HTTP port.

use std::sync::OnceLock;
use std::time::Duration;

use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};

use crate::application::ResponseOutcome;

// =============================================================================
// Global Metrics Handle
// =============================================================================

static PROMETHEUS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Initialize the Prometheus metrics recorder.
///
/// Idempotent: later calls return the handle installed by the first.
///
/// # Errors
///
/// Returns an error if another global recorder is already installed.
pub fn init_metrics() -> Result<PrometheusHandle, BuildError> {
    if let Some(handle) = PROMETHEUS_HANDLE.get() {
        return Ok(handle.clone());
    }

    let handle = PrometheusBuilder::new().install_recorder()?;
    register_metrics();

    Ok(PROMETHEUS_HANDLE.get_or_init(|| handle).clone())
}

/// Get the Prometheus handle for rendering metrics.
///
/// Returns `None` if metrics have not been initialized.
#[must_use]
pub fn get_metrics_handle() -> Option<PrometheusHandle> {
    PROMETHEUS_HANDLE.get().cloned()
}

/// Render the current metrics in Prometheus text format.
///
/// Empty when the recorder is not installed.
#[must_use]
pub fn render() -> String {
    get_metrics_handle()
        .map(|handle| handle.render())
        .unwrap_or_default()
}

// =============================================================================
// Metric Registration
// =============================================================================

fn register_metrics() {
    describe_counter!(
        "signal_bridge_webhooks_total",
        "Total webhook deliveries by terminal outcome"
    );
    describe_counter!(
        "signal_bridge_orders_total",
        "Total validated intents by dispatch result"
    );
    describe_histogram!(
        "signal_bridge_order_latency_seconds",
        "Round-trip time of order submissions to the broker"
    );
}

// =============================================================================
// Metric Recording Functions
// =============================================================================

/// Dispatch result label for a validated intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderResult {
    /// Broker accepted the order.
    Placed,
    /// Broker refused or could not be reached.
    Failed,
    /// Crypto intent, logged only.
    CryptoLogged,
}

impl OrderResult {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Placed => "placed",
            Self::Failed => "failed",
            Self::CryptoLogged => "crypto_logged",
        }
    }

    /// Dispatch result of an outcome, if the alert got past validation.
    #[must_use]
    pub const fn from_outcome(outcome: &ResponseOutcome) -> Option<Self> {
        match outcome {
            ResponseOutcome::OrderPlaced { .. } => Some(Self::Placed),
            ResponseOutcome::OrderFailed { .. } => Some(Self::Failed),
            ResponseOutcome::CryptoLogged { .. } => Some(Self::CryptoLogged),
            ResponseOutcome::Ignored { .. } | ResponseOutcome::Rejected { .. } => None,
        }
    }
}

/// Record the terminal outcome of one webhook delivery.
pub fn record_webhook(outcome: &ResponseOutcome) {
    counter!(
        "signal_bridge_webhooks_total",
        "outcome" => outcome.label()
    )
    .increment(1);

    if let Some(result) = OrderResult::from_outcome(outcome) {
        counter!(
            "signal_bridge_orders_total",
            "result" => result.as_str()
        )
        .increment(1);
    }
}

/// Record the round-trip time of one order submission.
pub fn record_order_latency(duration: Duration) {
    histogram!("signal_bridge_order_latency_seconds").record(duration.as_secs_f64());
}

// =============================================================================
// Tests
// =============================================================================
