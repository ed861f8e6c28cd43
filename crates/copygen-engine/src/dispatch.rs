//! Turns (product, configuration, selection) into planned backend requests

use copygen_gateway::Endpoint;
use serde::Serialize;
use serde_json::{Value, json};

use crate::catalog::{self, ArtifactContract};
use crate::model::{ArtifactKind, Configuration, Product, Selection};

/// One backend call to make
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlannedRequest {
    pub kind: ArtifactKind,
    pub endpoint: Endpoint,
    pub payload: Value,
}

fn build_payload(product: &Product, config: Configuration, contract: &ArtifactContract) -> Value {
    let mut payload = json!({ "product": product });
    if contract.uses_style {
        payload["tone"] = json!(config.tone);
        payload["length"] = json!(config.length);
        payload["style"] = json!(config.style);
    }
    if contract.uses_platform {
        payload["platform"] = json!(config.platform);
    }
    payload
}

/// Plan the request for a single kind.
#[must_use]
pub fn plan_request(
    product: &Product,
    config: Configuration,
    kind: ArtifactKind,
) -> PlannedRequest {
    let contract = catalog::contract(kind);
    PlannedRequest {
        kind,
        endpoint: contract.endpoint,
        payload: build_payload(product, config, contract),
    }
}

/// Plan every request a selection needs, in catalog order.
///
/// Pure: identical inputs always produce identical plans.
#[must_use]
pub fn plan_requests(
    product: &Product,
    config: Configuration,
    selection: Selection,
) -> Vec<PlannedRequest> {
    catalog::resolve(selection)
        .into_iter()
        .map(|kind| plan_request(product, config, kind))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Length, Platform, Style, Tone};
    use proptest::prelude::*;

    fn mug() -> Product {
        Product::new("Mug", "Ceramic coffee mug")
            .with_features(["dishwasher safe", "12oz"])
            .with_materials(["ceramic"])
            .with_brand("Acme")
            .with_price("12.99")
    }

    #[test]
    fn test_marketing_payload_carries_platform() {
        let config = Configuration::new(Tone::Witty, Length::Short, Style::Storytelling)
            .with_platform(Platform::Instagram);
        let request = plan_request(&mug(), config, ArtifactKind::Marketing);

        assert_eq!(request.endpoint.path(), "/generate/marketing");
        assert_eq!(
            request.payload,
            json!({
                "product": mug(),
                "platform": "instagram",
                "tone": "witty",
                "length": "short",
                "style": "storytelling"
            })
        );
    }

    #[test]
    fn test_style_kinds_omit_platform() {
        for kind in [ArtifactKind::Description, ArtifactKind::Seo] {
            let request = plan_request(&mug(), Configuration::default(), kind);
            let body = request.payload.as_object().unwrap();
            assert_eq!(body.len(), 4, "{kind}");
            assert_eq!(body["tone"], "default");
            assert_eq!(body["length"], "medium");
            assert_eq!(body["style"], "standard");
            assert!(!body.contains_key("platform"));
        }
    }

    #[test]
    fn test_product_only_kinds() {
        for kind in [ArtifactKind::ImagePrompt, ArtifactKind::MissingFields] {
            let request = plan_request(&mug(), Configuration::default(), kind);
            assert_eq!(request.payload, json!({ "product": mug() }), "{kind}");
        }
    }

    #[test]
    fn test_plan_all_follows_catalog() {
        let plan = plan_requests(&mug(), Configuration::default(), Selection::All);
        let endpoints: Vec<_> = plan.iter().map(|r| r.endpoint.path()).collect();
        assert_eq!(
            endpoints,
            [
                "/generate/description",
                "/generate/seo",
                "/generate/marketing",
                "/generate/image-prompt",
                "/generate/missing-fields"
            ]
        );
    }

    fn arb_product() -> impl Strategy<Value = Product> {
        (
            ".{0,24}",
            ".{0,64}",
            prop::collection::vec(".{0,12}", 0..4),
            prop::collection::vec(".{0,12}", 0..3),
            ".{0,12}",
            "[0-9]{0,4}(\\.[0-9]{2})?",
            prop::option::of(prop::collection::vec("[a-z]{1,8}", 0..4)),
        )
            .prop_map(|(name, desc, features, materials, brand, price, tags)| {
                let mut product = Product::new(name, desc)
                    .with_features(features)
                    .with_materials(materials)
                    .with_brand(brand)
                    .with_price(price);
                product.tags = tags;
                product
            })
    }

    fn arb_config() -> impl Strategy<Value = Configuration> {
        (
            prop::sample::select(vec![
                Tone::Default,
                Tone::Professional,
                Tone::Conversational,
                Tone::Witty,
                Tone::Enthusiastic,
            ]),
            prop::sample::select(vec![Length::Short, Length::Medium, Length::Long]),
            prop::sample::select(vec![
                Style::Standard,
                Style::Storytelling,
                Style::Minimalistic,
                Style::Technical,
            ]),
            prop::sample::select(vec![Platform::Email, Platform::Instagram, Platform::Facebook]),
        )
            .prop_map(|(tone, length, style, platform)| {
                Configuration::new(tone, length, style).with_platform(platform)
            })
    }

    fn arb_selection() -> impl Strategy<Value = Selection> {
        prop_oneof![
            Just(Selection::All),
            prop::sample::select(ArtifactKind::ALL.to_vec()).prop_map(Selection::One),
        ]
    }

    proptest! {
        #[test]
        fn prop_planning_is_deterministic(
            product in arb_product(),
            config in arb_config(),
            selection in arb_selection(),
        ) {
            let first = plan_requests(&product, config, selection);
            let second = plan_requests(&product.clone(), config, selection);
            prop_assert_eq!(&first, &second);

            let kinds: Vec<_> = first.iter().map(|r| r.kind).collect();
            prop_assert_eq!(kinds, catalog::resolve(selection));

            for request in &first {
                prop_assert_eq!(&request.payload["product"], &json!(product));
            }
        }
    }
}
