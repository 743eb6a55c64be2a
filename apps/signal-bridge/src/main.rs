//! Signal Bridge Binary
//!
//! Starts the alert webhook server.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin signal-bridge
//! ```
//!
//! # Environment Variables
//!
//! - `APCA_API_KEY_ID`: Alpaca API key id
//! - `APCA_API_SECRET_KEY`: Alpaca API secret
//! - `APCA_BASE_URL`: Trading API base URL (default: <https://paper-api.alpaca.markets>)
//! - `APCA_TIMEOUT_SECS`: Order request timeout (default: 30)
//! - `BRIDGE_HOST`: Listen address (default: 0.0.0.0)
//! - `BRIDGE_PORT`: Listen port (default: 8000)
//! - `OTEL_ENABLED`: Export spans over OTLP (default: false)
//! - `OTEL_EXPORTER_OTLP_ENDPOINT`: OTLP endpoint (default: <http://localhost:4317>)
//! - `OTEL_SERVICE_NAME`: Service name (default: signal-bridge)
//! - `RUST_LOG`: Log level (default: info)

use std::sync::Arc;

use signal_bridge::infrastructure::http::{AppState, HttpServer, create_router};
use signal_bridge::infrastructure::telemetry;
use signal_bridge::{AlpacaBrokerAdapter, BridgeConfig, init_metrics};
use tokio::signal;
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    load_dotenv();

    // Initialize telemetry (OpenTelemetry + tracing)
    let telemetry_guard = telemetry::init();

    tracing::info!(
        span_export = telemetry_guard.is_exporting(),
        "Starting Signal Bridge"
    );

    // Initialize Prometheus metrics
    if let Err(e) = init_metrics() {
        tracing::warn!(error = %e, "Prometheus recorder not installed, /metrics will be empty");
    }

    let config = Arc::new(BridgeConfig::from_env()?);
    log_config(&config);

    let broker = Arc::new(AlpacaBrokerAdapter::new(&config.alpaca_config())?);
    let router = create_router(AppState::new(broker, Arc::clone(&config)));

    let shutdown_token = CancellationToken::new();
    let server = HttpServer::new(config.server.socket_addr(), router, shutdown_token.clone());
    let mut server_handle = tokio::spawn(server.run());

    tracing::info!("Signal bridge ready");

    tokio::select! {
        result = &mut server_handle => {
            // Only reached if the server could not start or died
            result??;
        }
        () = await_shutdown() => {
            shutdown_token.cancel();
            server_handle.await??;
        }
    }

    tracing::info!("Signal bridge stopped");
    Ok(())
}

/// Load .env file from current directory or any ancestor directory.
fn load_dotenv() {
    if dotenvy::dotenv().is_ok() {
        return;
    }

    if let Ok(cwd) = std::env::current_dir() {
        let mut dir = cwd.as_path();
        while let Some(parent) = dir.parent() {
            let env_path = parent.join(".env");
            if env_path.exists() {
                let _ = dotenvy::from_path(&env_path);
                return;
            }
            dir = parent;
        }
    }
}

/// Log the parsed configuration.
fn log_config(config: &BridgeConfig) {
    let alpaca = config.alpaca_config();
    tracing::info!(
        addr = %config.server.socket_addr(),
        base_url = %config.alpaca.base_url,
        timeout_secs = config.alpaca.timeout.as_secs(),
        paper = alpaca.is_paper(),
        "Configuration loaded"
    );

    if !config.credentials.is_complete() {
        tracing::warn!(
            apca_api_key_id_set = config.credentials.has_api_key(),
            apca_api_secret_key_set = config.credentials.has_api_secret(),
            "Alpaca credentials incomplete; orders will be refused by the broker"
        );
    }
    if alpaca.is_live() {
        tracing::warn!("LIVE trading endpoint configured - orders execute with real money");
    }
}

/// Wait for shutdown signal (SIGTERM or SIGINT).
#[allow(clippy::expect_used)]
async fn await_shutdown() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("signal handler installation is critical for graceful shutdown");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("SIGTERM handler installation is critical for graceful shutdown")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, initiating shutdown");
        }
    }
}
