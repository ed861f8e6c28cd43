//! HTTP gateway to the generation backend
//!
//! Joins endpoint paths onto a configured base URL and POSTs JSON payloads
//! through the shared [`HttpClient`](crate::http_client::HttpClient).

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use crate::http_client::HttpClient;
use crate::types::{BackendGateway, Endpoint};
use crate::{GatewayError, TransportError};

/// Base URL used when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Default whole-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Default TCP connect timeout
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Connection settings for [`HttpGateway`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewaySettings {
    pub base_url: String,
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for GatewaySettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
        }
    }
}

impl GatewaySettings {
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Gateway that talks to the backend over HTTP.
///
/// Cloning is cheap and clones share one connection pool.
#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: Arc<HttpClient>,
    base_url: String,
}

impl HttpGateway {
    /// Create a gateway from connection settings
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::InvalidBaseUrl` if the base URL is not http(s),
    /// or `GatewayError::ClientBuild` if the HTTP client cannot be constructed.
    pub fn new(settings: GatewaySettings) -> Result<Self, GatewayError> {
        let base_url = settings.base_url.trim();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(GatewayError::InvalidBaseUrl(settings.base_url));
        }
        let base_url = base_url.trim_end_matches('/').to_string();

        let client = HttpClient::new(settings.timeout, settings.connect_timeout)?;

        Ok(Self {
            client: Arc::new(client),
            base_url,
        })
    }

    /// Base URL with any trailing slash removed
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url_for(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }
}

#[async_trait]
impl BackendGateway for HttpGateway {
    async fn invoke(&self, endpoint: Endpoint, payload: &Value) -> Result<Value, TransportError> {
        let url = self.url_for(endpoint);
        debug!(endpoint = %endpoint, "Posting generation request");
        self.client.post_json(&url, payload).await
    }
}
