#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::too_many_lines,
        clippy::needless_pass_by_value,
        clippy::items_after_statements,
        clippy::panic
    )
)]

//! Signal Bridge - Alert Webhook to Broker Relay
//!
//! An HTTP service that receives trade alerts from a charting/alerting
//! service, validates and normalizes them, and forwards qualifying alerts as
//! market orders to the Alpaca trading API.
//!
//! # Layers (inside → outside)
//!
//! - **Domain**: Pure types and rules
//!   - `shared`: Ticker symbols and the crypto classification
//!   - `signal`: Trade intents, quantity coercion, rejection reasons
//!   - `order_execution`: Market order requests and their value objects
//!
//! - **Application**: Use cases and port definitions
//!   - `ports`: The broker interface
//!   - `use_cases`: Normalizer, dispatcher, webhook pipeline
//!
//! - **Infrastructure**: Adapters and external integrations
//!   - `broker`: Alpaca REST client
//!   - `http`: Axum router and server
//!   - `config`: Environment configuration
//!   - `metrics` / `telemetry`: Prometheus and tracing setup
//!
//! # Data Flow
//!
//! ```text
//! POST /tv-webhook ──► Normalizer ──► Dispatcher ──► Alpaca /v2/orders
//!                          │              │
//!                          └─ ignored /   └─ crypto: logged only
//!                             rejected
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Module Declarations
// =============================================================================

/// Domain layer - Pure business types with no I/O.
pub mod domain;

/// Application layer - Use cases and port definitions.
pub mod application;

/// Infrastructure layer - Adapters and external integrations.
pub mod infrastructure;

// =============================================================================
// Re-exports
// =============================================================================

// Domain types
pub use domain::order_execution::{OrderRequest, OrderSide, OrderType, TimeInForce};
pub use domain::shared::Symbol;
pub use domain::signal::{IgnoreReason, RejectReason, SignalRejection, TradeIntent};

// Application
pub use application::{
    BrokerError, BrokerPort, BrokerResponse, DispatchOrderUseCase, NormalizeSignalUseCase,
    OutcomeClass, ProcessWebhookUseCase, ResponseOutcome,
};

// Infrastructure config
pub use infrastructure::config::{BridgeConfig, ConfigError, Credentials};

// Broker adapter
pub use infrastructure::broker::{AlpacaBrokerAdapter, AlpacaConfig, AlpacaError};

// HTTP
pub use infrastructure::http::{AppState, HttpServer, HttpServerError, create_router};

// Metrics
pub use infrastructure::metrics::init_metrics;

// Telemetry
pub use infrastructure::telemetry::{TelemetryConfig, TelemetryGuard, init as init_telemetry};
