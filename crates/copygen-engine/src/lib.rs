//! Generation orchestration for copygen
//!
//! Turns one logical request ("all content" or "one kind of content" for a
//! product under a style configuration) into concurrent backend calls and
//! assembles the settled results.
//!
//! # Module Organization
//!
//! - `model`: product, style configuration, artifact kinds, selection
//! - `catalog`: per-kind endpoint and response contracts
//! - `dispatch`: pure planning of backend requests
//! - `outcome`: per-kind results and the aggregated outcome
//! - `orchestrator`: concurrent execution with failure isolation
//! - `cancel`: whole-call cancellation

pub mod cancel;
pub mod catalog;
pub mod dispatch;
pub mod model;
pub mod orchestrator;
pub mod outcome;

pub use cancel::{CancelHandle, CancelSignal, cancel_pair};
pub use catalog::{ArtifactContract, CATALOG, ResultShape};
pub use dispatch::{PlannedRequest, plan_request, plan_requests};
pub use model::{
    ArtifactKind, Configuration, Length, Platform, Product, Selection, Style, StyleChoice,
    StyleOptions, Tone,
};
pub use orchestrator::Orchestrator;
pub use outcome::{ArtifactContent, ArtifactResult, GenerationOutcome};

pub use copygen_utils::error::{ConfigurationError, GenerationError};
