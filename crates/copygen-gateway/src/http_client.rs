//! Shared HTTP client infrastructure for the generation backend
//!
//! Wraps a `reqwest::Client` configured once per gateway, with connect and
//! request timeouts. Each call is a single attempt: a failed request is
//! reported, not retried.

use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use crate::{GatewayError, TransportError};

/// Maximum number of characters of an error body kept in a status error
const MAX_ERROR_BODY_CHARS: usize = 200;

/// HTTP client for JSON POST requests
#[derive(Debug, Clone)]
pub(crate) struct HttpClient {
    client: Client,
    request_timeout: Duration,
    connect_timeout: Duration,
}

impl HttpClient {
    /// Create a new HTTP client with the given timeouts
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::ClientBuild` if the client cannot be constructed
    pub fn new(request_timeout: Duration, connect_timeout: Duration) -> Result<Self, GatewayError> {
        let client = Client::builder()
            .connect_timeout(connect_timeout)
            .timeout(request_timeout)
            .pool_idle_timeout(Duration::from_secs(90))
            .pool_max_idle_per_host(10)
            .build()
            .map_err(|e| GatewayError::ClientBuild(e.to_string()))?;

        Ok(Self {
            client,
            request_timeout,
            connect_timeout,
        })
    }

    /// POST a JSON payload and parse the JSON response body.
    ///
    /// # Errors
    ///
    /// - `TransportError::Status` for any non-2xx status
    /// - `TransportError::Timeout` when the request timeout elapses
    /// - `TransportError::Malformed` when the body is not valid JSON
    /// - `TransportError::Connection` for every other network failure
    pub async fn post_json(&self, url: &str, payload: &Value) -> Result<Value, TransportError> {
        debug!(
            url = %url,
            timeout_secs = self.request_timeout.as_secs(),
            "Executing HTTP request"
        );

        let response = self
            .client
            .post(url)
            .header("content-type", "application/json")
            .json(payload)
            .send()
            .await
            .map_err(|e| self.map_request_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(map_status_error(status, &body));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| self.map_request_error(&e))?;

        serde_json::from_slice(&bytes)
            .map_err(|e| TransportError::Malformed(format!("response body is not JSON: {e}")))
    }

    fn map_request_error(&self, error: &reqwest::Error) -> TransportError {
        if error.is_timeout() {
            TransportError::Timeout {
                duration: self.timeout_limit(error.is_connect()),
            }
        } else if error.is_decode() {
            TransportError::Malformed(error.to_string())
        } else {
            TransportError::Connection(error.to_string())
        }
    }

    /// The limit that applies to a timeout in the connect phase or after it.
    fn timeout_limit(&self, during_connect: bool) -> Duration {
        if during_connect {
            self.connect_timeout
        } else {
            self.request_timeout
        }
    }
}

/// Map a non-success status and its body to a `TransportError::Status`.
///
/// A JSON body with a string `detail` field (the shape the backend uses for
/// errors) contributes that detail; other bodies are truncated.
fn map_status_error(status: StatusCode, body: &str) -> TransportError {
    let detail = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("detail").and_then(Value::as_str).map(str::to_string));

    let message = match detail {
        Some(detail) => detail,
        None if body.trim().is_empty() => status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string(),
        None => body.trim().chars().take(MAX_ERROR_BODY_CHARS).collect(),
    };

    TransportError::Status {
        status: status.as_u16(),
        message,
    }
}
