//! Request model: product, style configuration, artifact kinds
//!
//! All of these are plain values. Style enums reject unknown text at parse
//! time so a bad tone or platform never reaches the dispatcher.

use copygen_utils::error::ConfigurationError;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use strum::{Display, EnumString, VariantNames};

/// Product description supplied by the caller.
///
/// Text fields are opaque: they are forwarded to the backend as given.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    pub name: String,
    pub basic_description: String,
    pub features: Vec<String>,
    pub materials: Vec<String>,
    pub brand: String,
    /// Display text; numeric JSON prices are kept as their literal text
    #[serde(deserialize_with = "deserialize_price")]
    pub price: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl Product {
    #[must_use]
    pub fn new(name: impl Into<String>, basic_description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            basic_description: basic_description.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.features = features.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_materials<I, S>(mut self, materials: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.materials = materials.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = brand.into();
        self
    }

    #[must_use]
    pub fn with_price(mut self, price: impl Into<String>) -> Self {
        self.price = price.into();
        self
    }

    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PriceRepr {
    Text(String),
    Number(serde_json::Number),
}

fn deserialize_price<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<PriceRepr>::deserialize(deserializer)? {
        Some(PriceRepr::Text(text)) => text,
        Some(PriceRepr::Number(number)) => number.to_string(),
        None => String::new(),
    })
}

/// A closed set of style values parsed from user text.
pub trait StyleChoice: FromStr + VariantNames + Sized {
    /// Field name used in error messages
    const FIELD: &'static str;

    /// Parse `value` case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::InvalidValue` listing the accepted values.
    fn parse_choice(value: &str) -> Result<Self, ConfigurationError> {
        value
            .trim()
            .parse::<Self>()
            .map_err(|_| ConfigurationError::invalid_value(Self::FIELD, value, Self::VARIANTS))
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    EnumString,
    Display,
    VariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Tone {
    #[default]
    Default,
    Professional,
    Conversational,
    Witty,
    Enthusiastic,
}

impl StyleChoice for Tone {
    const FIELD: &'static str = "tone";
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    EnumString,
    Display,
    VariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Length {
    Short,
    #[default]
    Medium,
    Long,
}

impl StyleChoice for Length {
    const FIELD: &'static str = "length";
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    EnumString,
    Display,
    VariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Style {
    #[default]
    Standard,
    Storytelling,
    Minimalistic,
    Technical,
}

impl StyleChoice for Style {
    const FIELD: &'static str = "style";
}

/// Target channel for marketing copy
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    EnumString,
    Display,
    VariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Platform {
    #[default]
    Email,
    Instagram,
    Facebook,
}

impl StyleChoice for Platform {
    const FIELD: &'static str = "platform";
}

/// Style configuration applied to one generation request.
///
/// Immutable once built; passed by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Configuration {
    pub tone: Tone,
    pub length: Length,
    pub style: Style,
    pub platform: Platform,
}

impl Configuration {
    #[must_use]
    pub fn new(tone: Tone, length: Length, style: Style) -> Self {
        Self {
            tone,
            length,
            style,
            platform: Platform::default(),
        }
    }

    #[must_use]
    pub fn with_platform(self, platform: Platform) -> Self {
        Self { platform, ..self }
    }
}

/// Style values as raw text, e.g. from a form or command line.
///
/// Unset fields take the configuration defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleOptions {
    pub tone: Option<String>,
    pub length: Option<String>,
    pub style: Option<String>,
    pub platform: Option<String>,
}

fn parse_or_default<T: StyleChoice + Default>(
    value: Option<&str>,
) -> Result<T, ConfigurationError> {
    value.map_or_else(|| Ok(T::default()), T::parse_choice)
}

impl TryFrom<&StyleOptions> for Configuration {
    type Error = ConfigurationError;

    fn try_from(options: &StyleOptions) -> Result<Self, Self::Error> {
        Ok(Self {
            tone: parse_or_default(options.tone.as_deref())?,
            length: parse_or_default(options.length.as_deref())?,
            style: parse_or_default(options.style.as_deref())?,
            platform: parse_or_default(options.platform.as_deref())?,
        })
    }
}

/// A concrete kind of generated content.
///
/// Ordering follows catalog declaration order, which is also the iteration
/// order of a [`GenerationOutcome`](crate::GenerationOutcome).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    EnumString,
    Display,
    VariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ArtifactKind {
    Description,
    Seo,
    Marketing,
    #[strum(to_string = "image_prompt", serialize = "image-prompt")]
    ImagePrompt,
    #[strum(to_string = "missing_fields", serialize = "missing-fields")]
    MissingFields,
}

impl ArtifactKind {
    /// Every kind, in catalog order
    pub const ALL: [Self; 5] = [
        Self::Description,
        Self::Seo,
        Self::Marketing,
        Self::ImagePrompt,
        Self::MissingFields,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Description => "description",
            Self::Seo => "seo",
            Self::Marketing => "marketing",
            Self::ImagePrompt => "image_prompt",
            Self::MissingFields => "missing_fields",
        }
    }
}

/// Which artifacts a request asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Selection {
    #[default]
    All,
    One(ArtifactKind),
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::One(kind) => f.write_str(kind.as_str()),
        }
    }
}

impl From<ArtifactKind> for Selection {
    fn from(kind: ArtifactKind) -> Self {
        Self::One(kind)
    }
}

impl FromStr for Selection {
    type Err = ConfigurationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        if trimmed.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        trimmed.parse::<ArtifactKind>().map(Self::One).map_err(|_| {
            let mut expected = vec!["all"];
            expected.extend_from_slice(ArtifactKind::VARIANTS);
            ConfigurationError::invalid_value("kind", value, &expected)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_configuration_defaults() {
        let config = Configuration::default();
        assert_eq!(config.tone, Tone::Default);
        assert_eq!(config.length, Length::Medium);
        assert_eq!(config.style, Style::Standard);
        assert_eq!(config.platform, Platform::Email);
    }

    #[test]
    fn test_style_parsing_is_case_insensitive() {
        assert_eq!(Tone::parse_choice("Witty").unwrap(), Tone::Witty);
        assert_eq!(Length::parse_choice(" long ").unwrap(), Length::Long);
        assert_eq!(
            Style::parse_choice("MINIMALISTIC").unwrap(),
            Style::Minimalistic
        );
        assert_eq!(
            Platform::parse_choice("instagram").unwrap(),
            Platform::Instagram
        );
    }

    #[test]
    fn test_invalid_tone_reports_field_and_choices() {
        let err = Tone::parse_choice("sarcastic").unwrap_err();
        assert_eq!(err.field(), "tone");
        let msg = err.to_string();
        assert!(msg.contains("sarcastic"));
        assert!(msg.contains("default, professional, conversational, witty, enthusiastic"));
    }

    #[test]
    fn test_style_options_fill_defaults() {
        let options = StyleOptions {
            tone: Some("professional".into()),
            ..StyleOptions::default()
        };
        let config = Configuration::try_from(&options).unwrap();
        assert_eq!(
            config,
            Configuration::new(Tone::Professional, Length::Medium, Style::Standard)
        );
    }

    #[test]
    fn test_style_options_reject_unknown_platform() {
        let options = StyleOptions {
            platform: Some("myspace".into()),
            ..StyleOptions::default()
        };
        let err = Configuration::try_from(&options).unwrap_err();
        assert_eq!(err.field(), "platform");
    }

    #[test]
    fn test_artifact_kind_order_and_names() {
        let mut sorted = ArtifactKind::ALL;
        sorted.sort();
        assert_eq!(sorted, ArtifactKind::ALL);
        for kind in ArtifactKind::ALL {
            assert_eq!(kind.to_string(), kind.as_str());
            assert_eq!(
                serde_json::to_value(kind).unwrap(),
                json!(kind.as_str())
            );
        }
        assert_eq!(
            ArtifactKind::VARIANTS,
            &["description", "seo", "marketing", "image_prompt", "missing_fields"]
        );
    }

    #[test]
    fn test_selection_parsing() {
        assert_eq!("all".parse::<Selection>().unwrap(), Selection::All);
        assert_eq!(
            "seo".parse::<Selection>().unwrap(),
            Selection::One(ArtifactKind::Seo)
        );
        assert_eq!(
            "image-prompt".parse::<Selection>().unwrap(),
            Selection::One(ArtifactKind::ImagePrompt)
        );
        let err = "tagline".parse::<Selection>().unwrap_err();
        assert_eq!(err.field(), "kind");
        assert!(err.to_string().contains("all, description"));
    }

    #[test]
    fn test_product_price_accepts_numbers() {
        let product: Product = serde_json::from_value(json!({
            "name": "Mug",
            "price": 12.5
        }))
        .unwrap();
        assert_eq!(product.price, "12.5");
        assert!(product.features.is_empty());

        let product: Product = serde_json::from_value(json!({"price": null})).unwrap();
        assert_eq!(product.price, "");
    }

    #[test]
    fn test_product_omits_absent_optional_fields() {
        let value = serde_json::to_value(Product::new("Mug", "A mug")).unwrap();
        let keys: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys.len(), 6);
        for key in [
            "name",
            "basic_description",
            "features",
            "materials",
            "brand",
            "price",
        ] {
            assert!(keys.contains(&key), "missing {key}");
        }

        let value =
            serde_json::to_value(Product::new("Mug", "A mug").with_tags(["kitchen"])).unwrap();
        assert_eq!(value["tags"], json!(["kitchen"]));
    }

    #[test]
    fn test_product_category_is_serialized_when_set() {
        let lamp = Product::new("Lamp", "Desk lamp").with_category("Lighting");
        let value = serde_json::to_value(lamp).unwrap();
        assert_eq!(value["category"], "Lighting");
        assert!(value.get("subcategory").is_none());
    }
}
