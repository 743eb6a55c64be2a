//! HTTP client wrapper for the Alpaca trading API.

use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde_json::Value;

use super::config::AlpacaConfig;
use super::error::AlpacaError;

/// Statuses that count as an accepted submission.
const ACCEPTED_STATUSES: [StatusCode; 2] = [StatusCode::OK, StatusCode::CREATED];

/// HTTP client for Alpaca API.
///
/// One attempt per call; the configured timeout bounds the whole exchange.
#[derive(Debug, Clone)]
pub struct AlpacaHttpClient {
    client: Client,
    api_key: String,
    api_secret: String,
    orders_url: String,
}

/// Accepted response: status plus parsed JSON body.
#[derive(Debug, Clone)]
pub struct AcceptedResponse {
    /// HTTP status (200 or 201).
    pub status: u16,
    /// Parsed body.
    pub body: Value,
}

impl AlpacaHttpClient {
    /// Create a new HTTP client from config.
    pub fn new(config: &AlpacaConfig) -> Result<Self, AlpacaError> {
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            api_secret: config.api_secret.clone(),
            orders_url: config.orders_url(),
        })
    }

    /// POST an order body to the orders endpoint.
    #[allow(clippy::future_not_send)]
    pub async fn post_order<B: Serialize>(
        &self,
        body: &B,
    ) -> Result<AcceptedResponse, AlpacaError> {
        let response = self
            .client
            .post(&self.orders_url)
            .header("APCA-API-KEY-ID", &self.api_key)
            .header("APCA-API-SECRET-KEY", &self.api_secret)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        tracing::debug!(status = status.as_u16(), body = %text, "Alpaca response");

        if !ACCEPTED_STATUSES.contains(&status) {
            return Err(AlpacaError::Api {
                status: status.as_u16(),
                body: text,
            });
        }

        let body = serde_json::from_str(&text).map_err(|e| AlpacaError::JsonParse(e.to_string()))?;

        Ok(AcceptedResponse {
            status: status.as_u16(),
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> AlpacaHttpClient {
        let config = AlpacaConfig::new("key".to_string(), "secret".to_string(), server.uri());
        AlpacaHttpClient::new(&config).unwrap()
    }

    #[tokio::test]
    async fn post_sends_auth_headers_and_json_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v2/orders"))
            .and(header("APCA-API-KEY-ID", "key"))
            .and(header("APCA-API-SECRET-KEY", "secret"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({"hello": "world"})))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "abc"})))
            .expect(1)
            .mount(&server)
            .await;

        let response = client_for(&server)
            .post_order(&json!({"hello": "world"}))
            .await
            .unwrap();

        assert_eq!(response.status, 201);
        assert_eq!(response.body, json!({"id": "abc"}));
    }

    #[tokio::test]
    async fn other_success_statuses_are_not_accepted() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(202).set_body_string("queued"))
            .mount(&server)
            .await;

        let err = client_for(&server).post_order(&json!({})).await.unwrap_err();
        assert_eq!(
            err,
            AlpacaError::Api {
                status: 202,
                body: "queued".to_string()
            }
        );
    }

    #[tokio::test]
    async fn empty_accepted_body_is_malformed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let err = client_for(&server).post_order(&json!({})).await.unwrap_err();
        assert!(matches!(err, AlpacaError::JsonParse(_)));
    }

    #[tokio::test]
    async fn timeout_is_a_transport_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"id": "late"}))
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&server)
            .await;

        let config = AlpacaConfig::new("key".to_string(), "secret".to_string(), server.uri())
            .with_timeout(Duration::from_millis(100));
        let client = AlpacaHttpClient::new(&config).unwrap();

        let err = client.post_order(&json!({})).await.unwrap_err();
        assert!(matches!(err, AlpacaError::Http(_)));
    }
}
