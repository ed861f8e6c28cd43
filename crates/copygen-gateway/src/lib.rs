//! Backend gateway abstraction for the generation service
//!
//! The orchestrator only sees the [`BackendGateway`] trait: one endpoint, one
//! JSON payload, one round trip. [`HttpGateway`] is the production
//! implementation; `ScriptedGateway` (feature `test-utils`) answers from
//! canned responses in-process.

mod http_client;
mod http_gateway;
#[cfg(any(test, feature = "test-utils"))]
mod scripted;
mod types;

use std::sync::Arc;

pub use copygen_utils::error::{GatewayError, TransportError, TransportErrorKind};
pub use http_gateway::{
    DEFAULT_BASE_URL, DEFAULT_CONNECT_TIMEOUT, DEFAULT_TIMEOUT, GatewaySettings, HttpGateway,
};
#[cfg(any(test, feature = "test-utils"))]
pub use scripted::{RecordedCall, ScriptedGateway};
pub use types::{BackendGateway, Endpoint};

/// Build the production gateway from connection settings.
///
/// # Errors
///
/// Returns `GatewayError` if the base URL is invalid or the HTTP client cannot
/// be constructed.
pub fn from_settings(settings: GatewaySettings) -> Result<Arc<dyn BackendGateway>, GatewayError> {
    let gateway = HttpGateway::new(settings)?;
    Ok(Arc::new(gateway))
}
