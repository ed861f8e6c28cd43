//! Orchestrator against a real HTTP gateway and a mock backend

use std::sync::Arc;
use std::time::Duration;

use copygen::gateway::GatewaySettings;
use copygen::{
    ArtifactKind, Configuration, GenerationError, HttpGateway, Length, Orchestrator, Platform,
    Product, Selection, Style, Tone, TransportErrorKind, cancel_pair,
};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn mug() -> Product {
    Product::new("Mug", "Ceramic coffee mug")
        .with_features(["dishwasher safe"])
        .with_materials(["ceramic"])
        .with_brand("Acme")
        .with_price("12.99")
}

fn orchestrator_for(server: &MockServer, timeout: Duration) -> Orchestrator {
    let settings = GatewaySettings::default()
        .with_base_url(server.uri())
        .with_timeout(timeout);
    let gateway = HttpGateway::new(settings).unwrap();
    Orchestrator::new(Arc::new(gateway))
}

async fn mount_ok(server: &MockServer, endpoint: &str, body: serde_json::Value) {
    Mock::given(method("POST"))
        .and(path(endpoint))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn all_kinds_with_one_backend_failure() {
    let server = MockServer::start().await;
    mount_ok(&server, "/generate/description", json!({"description": "A sturdy mug."})).await;
    mount_ok(
        &server,
        "/generate/seo",
        json!({"seo": {"title": "Acme Mug", "meta_description": "Ceramic mug"}}),
    )
    .await;
    mount_ok(&server, "/generate/image-prompt", json!({"image_prompt": "A mug on oak"})).await;
    mount_ok(
        &server,
        "/generate/missing-fields",
        json!({"missing_fields": {"dimensions": "Add the capacity"}}),
    )
    .await;
    Mock::given(method("POST"))
        .and(path("/generate/marketing"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({"detail": "model overloaded"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let orchestrator = orchestrator_for(&server, Duration::from_secs(5));
    let outcome = orchestrator
        .generate_all(&mug(), Configuration::default())
        .await;

    assert_eq!(outcome.len(), 5);
    assert_eq!(outcome.successes(), 4);
    assert!(outcome.has_failures());

    let marketing = outcome.get(ArtifactKind::Marketing).unwrap();
    assert_eq!(marketing.error_kind(), Some(TransportErrorKind::Status));

    let seo = outcome.get(ArtifactKind::Seo).unwrap();
    assert_eq!(
        seo.content().and_then(|c| c.as_structured()),
        Some(&json!({"title": "Acme Mug", "meta_description": "Ceramic mug"}))
    );

    let rendered = serde_json::to_value(&outcome).unwrap();
    assert_eq!(rendered["marketing"]["status"], "failure");
    assert!(
        rendered["marketing"]["message"]
            .as_str()
            .unwrap()
            .contains("model overloaded")
    );
}

#[tokio::test]
async fn marketing_request_body_matches_contract() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/generate/marketing"))
        .and(body_json(json!({
            "product": {
                "name": "Mug",
                "basic_description": "Ceramic coffee mug",
                "features": ["dishwasher safe"],
                "materials": ["ceramic"],
                "brand": "Acme",
                "price": "12.99"
            },
            "platform": "instagram",
            "tone": "witty",
            "length": "short",
            "style": "storytelling"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"marketing": "Sip happy."})))
        .expect(1)
        .mount(&server)
        .await;

    let config = Configuration::new(Tone::Witty, Length::Short, Style::Storytelling)
        .with_platform(Platform::Instagram);
    let orchestrator = orchestrator_for(&server, Duration::from_secs(5));
    let outcome = orchestrator
        .generate(&mug(), config, Selection::One(ArtifactKind::Marketing))
        .await;

    assert_eq!(outcome.len(), 1);
    let result = outcome.get(ArtifactKind::Marketing).unwrap();
    assert_eq!(result.content().and_then(|c| c.as_text()), Some("Sip happy."));
}

#[tokio::test]
async fn wrong_response_shape_is_malformed() {
    let server = MockServer::start().await;
    mount_ok(&server, "/generate/seo", json!({"seo": "just text"})).await;

    let orchestrator = orchestrator_for(&server, Duration::from_secs(5));
    let result = orchestrator
        .generate_one(&mug(), ArtifactKind::Seo, Configuration::default())
        .await;

    assert_eq!(result.error_kind(), Some(TransportErrorKind::Malformed));
}

#[tokio::test]
async fn slow_backend_times_out_per_kind() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/generate/image-prompt"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"image_prompt": "late"}))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let orchestrator = orchestrator_for(&server, Duration::from_millis(200));
    let result = orchestrator
        .generate_one(&mug(), ArtifactKind::ImagePrompt, Configuration::default())
        .await;

    assert_eq!(result.error_kind(), Some(TransportErrorKind::Timeout));
}

#[tokio::test]
async fn cancellation_abandons_in_flight_calls() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"description": "late"}))
                .set_delay(Duration::from_secs(10)),
        )
        .mount(&server)
        .await;

    let orchestrator = orchestrator_for(&server, Duration::from_secs(30));
    let (handle, signal) = cancel_pair();

    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(100)).await;
        handle.cancel();
    });

    let started = std::time::Instant::now();
    let result = orchestrator
        .generate_with_cancel(&mug(), Configuration::default(), Selection::All, &signal)
        .await;

    assert!(matches!(result, Err(GenerationError::Cancelled)));
    assert!(started.elapsed() < Duration::from_secs(5));
}

#[tokio::test]
async fn cancellation_discards_already_settled_kinds() {
    let server = MockServer::start().await;
    mount_ok(&server, "/generate/description", json!({"description": "A sturdy mug."})).await;
    mount_ok(&server, "/generate/seo", json!({"seo": {"title": "Acme Mug"}})).await;
    mount_ok(&server, "/generate/marketing", json!({"marketing": "Sip happy."})).await;
    mount_ok(&server, "/generate/image-prompt", json!({"image_prompt": "A mug on oak"})).await;
    Mock::given(method("POST"))
        .and(path("/generate/missing-fields"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"missing_fields": {}}))
                .set_delay(Duration::from_secs(10)),
        )
        .mount(&server)
        .await;

    let orchestrator = orchestrator_for(&server, Duration::from_secs(30));
    let (handle, signal) = cancel_pair();

    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(500)).await;
        handle.cancel();
    });

    let result = orchestrator
        .generate_with_cancel(&mug(), Configuration::default(), Selection::All, &signal)
        .await;

    assert!(matches!(result, Err(GenerationError::Cancelled)));
    let received = server.received_requests().await.unwrap();
    assert_eq!(received.len(), 5);
}
