//! Concurrent execution of planned generation requests.
//!
//! One logical request becomes one backend call per planned kind. All calls
//! run concurrently on the calling task and every one of them is allowed to
//! settle: a failing kind becomes a failure entry and never aborts its
//! siblings. The only whole-call failure is cancellation, which discards
//! every result.
//!
//! # Example
//!
//! ```rust,no_run
//! use copygen_engine::{Configuration, Orchestrator, Product};
//! use copygen_gateway::{GatewaySettings, from_settings};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let orchestrator = Orchestrator::new(from_settings(GatewaySettings::default())?);
//! let product = Product::new("Mug", "Ceramic coffee mug");
//! let outcome = orchestrator.generate_all(&product, Configuration::default()).await;
//! for (kind, result) in &outcome {
//!     println!("{kind}: {}", result.is_success());
//! }
//! # Ok(())
//! # }
//! ```

use copygen_gateway::BackendGateway;
use copygen_utils::error::GenerationError;
use copygen_utils::logging::{
    generation_span, log_artifact_failure, log_generation_cancelled, log_generation_complete,
    log_invocation_start,
};
use futures::future::join_all;
use std::sync::Arc;
use std::time::Instant;
use tracing::Instrument;

use crate::cancel::CancelSignal;
use crate::catalog;
use crate::dispatch::{PlannedRequest, plan_request, plan_requests};
use crate::model::{ArtifactKind, Configuration, Product, Selection, StyleOptions};
use crate::outcome::{ArtifactResult, GenerationOutcome};

/// Runs generation requests against a backend gateway.
///
/// Holds no per-request state; one orchestrator can serve any number of
/// concurrent requests.
#[derive(Clone)]
pub struct Orchestrator {
    gateway: Arc<dyn BackendGateway>,
}

impl std::fmt::Debug for Orchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Orchestrator").finish_non_exhaustive()
    }
}

impl Orchestrator {
    #[must_use]
    pub fn new(gateway: Arc<dyn BackendGateway>) -> Self {
        Self { gateway }
    }

    /// Generate every requested kind and wait for all of them to settle.
    pub async fn generate(
        &self,
        product: &Product,
        config: Configuration,
        selection: Selection,
    ) -> GenerationOutcome {
        let plan = plan_requests(product, config, selection);
        let span = generation_span(&selection.to_string(), plan.len());
        self.settle(plan).instrument(span).await
    }

    /// Like [`generate`](Self::generate), but abandons the request when
    /// `cancel` fires before every call has settled.
    ///
    /// # Errors
    ///
    /// Returns `GenerationError::Cancelled` if cancellation was requested
    /// before or during the call. No partial outcome is returned; in-flight
    /// backend requests are dropped.
    pub async fn generate_with_cancel(
        &self,
        product: &Product,
        config: Configuration,
        selection: Selection,
        cancel: &CancelSignal,
    ) -> Result<GenerationOutcome, GenerationError> {
        if cancel.is_cancelled() {
            return Err(GenerationError::Cancelled);
        }

        let plan = plan_requests(product, config, selection);
        let planned = plan.len();
        let span = generation_span(&selection.to_string(), planned);
        let started = Instant::now();

        async move {
            tokio::select! {
                biased;
                () = cancel.cancelled() => {
                    log_generation_cancelled(planned, started.elapsed());
                    Err(GenerationError::Cancelled)
                }
                outcome = self.settle(plan) => Ok(outcome),
            }
        }
        .instrument(span)
        .await
    }

    /// Parse raw style text and selection, then generate.
    ///
    /// # Errors
    ///
    /// Returns `GenerationError::Configuration` for an unknown style value or
    /// selection, before any backend call is made, and
    /// `GenerationError::Cancelled` as for
    /// [`generate_with_cancel`](Self::generate_with_cancel).
    pub async fn generate_from_options(
        &self,
        product: &Product,
        options: &StyleOptions,
        selection: &str,
        cancel: Option<&CancelSignal>,
    ) -> Result<GenerationOutcome, GenerationError> {
        let config = Configuration::try_from(options)?;
        let selection: Selection = selection.parse()?;
        match cancel {
            Some(signal) => {
                self.generate_with_cancel(product, config, selection, signal)
                    .await
            }
            None => Ok(self.generate(product, config, selection).await),
        }
    }

    /// Generate all five artifact kinds.
    pub async fn generate_all(
        &self,
        product: &Product,
        config: Configuration,
    ) -> GenerationOutcome {
        self.generate(product, config, Selection::All).await
    }

    /// Generate a single artifact kind and return its result directly.
    pub async fn generate_one(
        &self,
        product: &Product,
        kind: ArtifactKind,
        config: Configuration,
    ) -> ArtifactResult {
        let request = plan_request(product, config, kind);
        let span = generation_span(kind.as_str(), 1);
        self.settle_one(request).instrument(span).await
    }

    /// Like [`generate_one`](Self::generate_one), but abandons the call when
    /// `cancel` fires before it settles.
    ///
    /// # Errors
    ///
    /// Returns `GenerationError::Cancelled` if cancellation was requested
    /// before or during the call.
    pub async fn generate_one_with_cancel(
        &self,
        product: &Product,
        kind: ArtifactKind,
        config: Configuration,
        cancel: &CancelSignal,
    ) -> Result<ArtifactResult, GenerationError> {
        if cancel.is_cancelled() {
            return Err(GenerationError::Cancelled);
        }

        let request = plan_request(product, config, kind);
        let span = generation_span(kind.as_str(), 1);
        let started = Instant::now();

        async move {
            tokio::select! {
                biased;
                () = cancel.cancelled() => {
                    log_generation_cancelled(1, started.elapsed());
                    Err(GenerationError::Cancelled)
                }
                result = self.settle_one(request) => Ok(result),
            }
        }
        .instrument(span)
        .await
    }

    async fn settle_one(&self, request: PlannedRequest) -> ArtifactResult {
        let started = Instant::now();
        let (_, result) = self.invoke(&request).await;
        let succeeded = usize::from(result.is_success());
        log_generation_complete(succeeded, 1 - succeeded, started.elapsed());
        result
    }

    async fn settle(&self, plan: Vec<PlannedRequest>) -> GenerationOutcome {
        let started = Instant::now();
        let results = join_all(plan.iter().map(|request| self.invoke(request))).await;
        let outcome = GenerationOutcome::from_entries(results);
        log_generation_complete(outcome.successes(), outcome.failures(), started.elapsed());
        outcome
    }

    async fn invoke(&self, request: &PlannedRequest) -> (ArtifactKind, ArtifactResult) {
        let contract = catalog::contract(request.kind);
        log_invocation_start(request.kind.as_str(), request.endpoint.path());

        let result = self
            .gateway
            .invoke(request.endpoint, &request.payload)
            .await
            .and_then(|body| contract.extract(body));

        if let Err(error) = &result {
            log_artifact_failure(request.kind.as_str(), error);
        }
        (request.kind, ArtifactResult::from(result))
    }
}
