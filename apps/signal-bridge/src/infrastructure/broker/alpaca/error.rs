//! Alpaca-specific error types.

use thiserror::Error;

use crate::application::ports::BrokerError;

/// Errors from the Alpaca adapter.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AlpacaError {
    /// Request failed before a full response arrived.
    #[error("HTTP error: {0}")]
    Http(String),

    /// API answered with a non-accepted status.
    #[error("API error: {status} - {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body, verbatim.
        body: String,
    },

    /// Accepted response body was not JSON.
    #[error("JSON parsing error: {0}")]
    JsonParse(String),
}

impl From<reqwest::Error> for AlpacaError {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(err.to_string())
    }
}

impl From<AlpacaError> for BrokerError {
    fn from(err: AlpacaError) -> Self {
        match err {
            AlpacaError::Http(msg) => Self::Transport(msg),
            AlpacaError::Api { status, body } => Self::Rejected { status, body },
            AlpacaError::JsonParse(msg) => Self::MalformedResponse(msg),
        }
    }
}
