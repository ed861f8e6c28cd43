//! Per-kind results and the aggregated outcome of a generation request

use copygen_gateway::{TransportError, TransportErrorKind};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::collections::btree_map;

use crate::model::ArtifactKind;

/// Content produced for one artifact
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArtifactContent {
    Text(String),
    /// JSON object, e.g. SEO title and description
    Structured(Value),
}

impl ArtifactContent {
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Structured(_) => None,
        }
    }

    #[must_use]
    pub fn as_structured(&self) -> Option<&Value> {
        match self {
            Self::Structured(value) => Some(value),
            Self::Text(_) => None,
        }
    }
}

/// Result for one artifact kind. Never partial.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ArtifactResult {
    Success {
        content: ArtifactContent,
    },
    Failure {
        error_kind: TransportErrorKind,
        /// Redacted transport error message
        message: String,
    },
}

impl ArtifactResult {
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    #[must_use]
    pub fn content(&self) -> Option<&ArtifactContent> {
        match self {
            Self::Success { content } => Some(content),
            Self::Failure { .. } => None,
        }
    }

    #[must_use]
    pub fn error_kind(&self) -> Option<TransportErrorKind> {
        match self {
            Self::Failure { error_kind, .. } => Some(*error_kind),
            Self::Success { .. } => None,
        }
    }
}

impl From<Result<ArtifactContent, TransportError>> for ArtifactResult {
    fn from(result: Result<ArtifactContent, TransportError>) -> Self {
        match result {
            Ok(content) => Self::Success { content },
            Err(error) => Self::Failure {
                error_kind: error.kind(),
                message: error.redacted_message(),
            },
        }
    }
}

/// Results keyed by artifact kind.
///
/// Keys are exactly the kinds that were requested. Iteration follows catalog
/// order regardless of the order in which requests completed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GenerationOutcome {
    entries: BTreeMap<ArtifactKind, ArtifactResult>,
}

impl GenerationOutcome {
    pub(crate) fn from_entries(
        entries: impl IntoIterator<Item = (ArtifactKind, ArtifactResult)>,
    ) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn get(&self, kind: ArtifactKind) -> Option<&ArtifactResult> {
        self.entries.get(&kind)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, ArtifactKind, ArtifactResult> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = ArtifactKind> + '_ {
        self.entries.keys().copied()
    }

    #[must_use]
    pub fn successes(&self) -> usize {
        self.entries.values().filter(|r| r.is_success()).count()
    }

    #[must_use]
    pub fn failures(&self) -> usize {
        self.len() - self.successes()
    }

    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.failures() > 0
    }
}

impl<'a> IntoIterator for &'a GenerationOutcome {
    type Item = (&'a ArtifactKind, &'a ArtifactResult);
    type IntoIter = btree_map::Iter<'a, ArtifactKind, ArtifactResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
