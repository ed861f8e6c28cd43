//! Static registry of artifact kinds and their backend contracts

use copygen_gateway::{Endpoint, TransportError};
use serde::Serialize;
use serde_json::Value;

use crate::model::{ArtifactKind, Selection};
use crate::outcome::ArtifactContent;

/// JSON shape of an artifact's response field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultShape {
    /// JSON string
    Text,
    /// JSON object
    Structured,
}

/// How one artifact kind is requested and how its result is read back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ArtifactContract {
    pub kind: ArtifactKind,
    pub endpoint: Endpoint,
    pub response_field: &'static str,
    pub shape: ResultShape,
    /// Payload carries tone, length and style
    pub uses_style: bool,
    /// Payload carries platform
    pub uses_platform: bool,
}

/// Every artifact contract, in declaration order.
pub const CATALOG: [ArtifactContract; 5] = [
    ArtifactContract {
        kind: ArtifactKind::Description,
        endpoint: Endpoint::new("/generate/description"),
        response_field: "description",
        shape: ResultShape::Text,
        uses_style: true,
        uses_platform: false,
    },
    ArtifactContract {
        kind: ArtifactKind::Seo,
        endpoint: Endpoint::new("/generate/seo"),
        response_field: "seo",
        shape: ResultShape::Structured,
        uses_style: true,
        uses_platform: false,
    },
    ArtifactContract {
        kind: ArtifactKind::Marketing,
        endpoint: Endpoint::new("/generate/marketing"),
        response_field: "marketing",
        shape: ResultShape::Text,
        uses_style: true,
        uses_platform: true,
    },
    ArtifactContract {
        kind: ArtifactKind::ImagePrompt,
        endpoint: Endpoint::new("/generate/image-prompt"),
        response_field: "image_prompt",
        shape: ResultShape::Text,
        uses_style: false,
        uses_platform: false,
    },
    ArtifactContract {
        kind: ArtifactKind::MissingFields,
        endpoint: Endpoint::new("/generate/missing-fields"),
        response_field: "missing_fields",
        shape: ResultShape::Structured,
        uses_style: false,
        uses_platform: false,
    },
];

/// Expand a selection into concrete kinds, in catalog order.
#[must_use]
pub fn resolve(selection: Selection) -> Vec<ArtifactKind> {
    match selection {
        Selection::All => CATALOG.iter().map(|c| c.kind).collect(),
        Selection::One(kind) => vec![kind],
    }
}

/// Contract for `kind`.
#[must_use]
pub fn contract(kind: ArtifactKind) -> &'static ArtifactContract {
    let index = match kind {
        ArtifactKind::Description => 0,
        ArtifactKind::Seo => 1,
        ArtifactKind::Marketing => 2,
        ArtifactKind::ImagePrompt => 3,
        ArtifactKind::MissingFields => 4,
    };
    &CATALOG[index]
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl ArtifactContract {
    /// Read this artifact's content out of a backend response body.
    ///
    /// # Errors
    ///
    /// Returns `TransportError::Malformed` when the body is not an object, the
    /// response field is missing, or the field has the wrong JSON type.
    pub fn extract(&self, response: Value) -> Result<ArtifactContent, TransportError> {
        let body_type = json_type_name(&response);
        let Value::Object(mut body) = response else {
            return Err(TransportError::Malformed(format!(
                "expected a JSON object from {}, got {body_type}",
                self.endpoint
            )));
        };

        let field = body.remove(self.response_field).ok_or_else(|| {
            TransportError::Malformed(format!(
                "response from {} has no '{}' field",
                self.endpoint, self.response_field
            ))
        })?;

        match (self.shape, field) {
            (ResultShape::Text, Value::String(text)) => Ok(ArtifactContent::Text(text)),
            (ResultShape::Structured, object @ Value::Object(_)) => {
                Ok(ArtifactContent::Structured(object))
            }
            (shape, other) => Err(TransportError::Malformed(format!(
                "'{}' should be {}, got {}",
                self.response_field,
                match shape {
                    ResultShape::Text => "a string",
                    ResultShape::Structured => "an object",
                },
                json_type_name(&other)
            ))),
        }
    }
}
