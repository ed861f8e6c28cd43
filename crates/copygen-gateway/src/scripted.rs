//! In-process gateway with canned responses, for tests.
//!
//! Every endpoint answers with whatever was scripted for it, optionally after
//! a delay. Calls are recorded so tests can assert on what was sent and how
//! many requests were in flight at once.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use crate::TransportError;
use crate::types::{BackendGateway, Endpoint};

/// One recorded invocation
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub endpoint: Endpoint,
    pub payload: Value,
}

/// Scripted [`BackendGateway`] for tests.
///
/// Unscripted endpoints answer with a 404 status error.
#[derive(Debug, Default)]
pub struct ScriptedGateway {
    responses: HashMap<Endpoint, Result<Value, TransportError>>,
    delays: HashMap<Endpoint, Duration>,
    calls: Mutex<Vec<RecordedCall>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
    settled: AtomicUsize,
}

impl ScriptedGateway {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `endpoint` with `body`.
    #[must_use]
    pub fn respond(mut self, endpoint: Endpoint, body: Value) -> Self {
        self.responses.insert(endpoint, Ok(body));
        self
    }

    /// Fail every call to `endpoint` with `error`.
    #[must_use]
    pub fn fail(mut self, endpoint: Endpoint, error: TransportError) -> Self {
        self.responses.insert(endpoint, Err(error));
        self
    }

    /// Hold calls to `endpoint` for `delay` before answering.
    #[must_use]
    pub fn delay(mut self, endpoint: Endpoint, delay: Duration) -> Self {
        self.delays.insert(endpoint, delay);
        self
    }

    /// Every call started so far, in start order
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Highest number of calls observed in flight at the same time
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    /// Calls that ran to completion (dropped calls are not counted)
    pub fn settled_count(&self) -> usize {
        self.settled.load(Ordering::SeqCst)
    }
}

/// Decrements the in-flight counter even when the call future is dropped.
struct InFlightGuard<'a>(&'a AtomicUsize);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl BackendGateway for ScriptedGateway {
    async fn invoke(&self, endpoint: Endpoint, payload: &Value) -> Result<Value, TransportError> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(RecordedCall {
                endpoint,
                payload: payload.clone(),
            });

        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);
        let _guard = InFlightGuard(&self.in_flight);

        if let Some(delay) = self.delays.get(&endpoint) {
            tokio::time::sleep(*delay).await;
        }
        // Let sibling calls start before this one settles
        tokio::task::yield_now().await;

        let result = self
            .responses
            .get(&endpoint)
            .cloned()
            .unwrap_or_else(|| {
                Err(TransportError::Status {
                    status: 404,
                    message: format!("no script for {endpoint}"),
                })
            });

        self.settled.fetch_add(1, Ordering::SeqCst);
        result
    }
}
