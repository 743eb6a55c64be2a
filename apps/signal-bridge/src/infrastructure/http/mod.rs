//! HTTP Driver Adapter
//!
//! Axum router, response DTOs and the listener that serves them.

mod controller;
mod response;
mod server;

pub use controller::{AppState, create_router};
pub use response::{CheckEnvResponse, ENDPOINTS, RootResponse, WebhookResponse};
pub use server::{HttpServer, HttpServerError, serve};
