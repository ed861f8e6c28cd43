//! Core types for the backend gateway abstraction

use async_trait::async_trait;
use serde::{Serialize, Serializer};
use std::fmt;

use crate::TransportError;

/// Path of a generation endpoint, relative to the backend base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Endpoint(&'static str);

impl Endpoint {
    #[must_use]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[must_use]
    pub const fn path(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl Serialize for Endpoint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.0)
    }
}

/// Transport seam between the orchestrator and the generation backend.
///
/// One call is exactly one round trip: implementations never retry and never
/// batch. Implementations own every wire-level concern (base address, headers,
/// serialization); callers only see JSON values.
#[async_trait]
pub trait BackendGateway: Send + Sync {
    /// POST `payload` to `endpoint` and return the parsed JSON body.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` for connection failures, non-success statuses,
    /// bodies that are not JSON, and timeouts.
    async fn invoke(
        &self,
        endpoint: Endpoint,
        payload: &serde_json::Value,
    ) -> Result<serde_json::Value, TransportError>;
}
