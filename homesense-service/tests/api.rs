//! Endpoint tests driving the router directly with a mock completion provider.

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use homesense_service::models::PropertyRecord;
use homesense_service::services::providers::mock::MockTextProvider;
use homesense_service::services::{PropertyCatalog, StaticCatalog};
use homesense_service::startup::{build_router, AppState};
use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::sync::Arc;
use tower::util::ServiceExt;

const FIXTURE_ADDRESS: &str = "1 Test Street, Leeds LS1 1AA";

fn fixture_record() -> PropertyRecord {
    PropertyRecord {
        address: FIXTURE_ADDRESS.to_string(),
        property_type: "Flat".to_string(),
        beds: 2,
        price_guide: "£210,000".to_string(),
        simulated_risks: vec![
            "Cladding survey pending".to_string(),
            "Service charge £1,800 per year".to_string(),
        ],
        simulated_documents: BTreeMap::from([(
            "management_pack".to_string(),
            "Reserve fund healthy.".to_string(),
        )]),
    }
}

fn app_with(provider: Arc<MockTextProvider>) -> Router {
    let catalog = Arc::new(StaticCatalog::new([fixture_record()]));
    build_router(AppState::new(catalog, provider))
}

async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

// ============================================================================
// /health_check
// ============================================================================

#[tokio::test]
async fn health_check_returns_summary_and_record() {
    let provider = Arc::new(MockTextProvider::replying("Ask about the cladding."));
    let (status, body) = post_json(
        app_with(provider.clone()),
        "/health_check",
        json!({"address": FIXTURE_ADDRESS}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["address"], FIXTURE_ADDRESS);
    assert_eq!(body["summary"], "Ask about the cladding.");
    assert_eq!(body["data_used"], serde_json::to_value(fixture_record()).unwrap());
    assert_eq!(body["data_used"]["type"], "Flat");
    assert_eq!(body["data_used"]["price_guide"], "£210,000");

    let prompts = provider.prompts();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("Cladding survey pending"));
    assert!(prompts[0].contains("Management Pack: Reserve fund healthy."));
}

#[tokio::test]
async fn health_check_unknown_address_is_404_without_completion() {
    let provider = Arc::new(MockTextProvider::replying("unused"));
    let (status, body) = post_json(
        app_with(provider.clone()),
        "/health_check",
        json!({"address": "1 test street, leeds ls1 1aa"}),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Property not found"}));
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn health_check_unknown_address_is_404_even_when_provider_fails() {
    let provider = Arc::new(MockTextProvider::failing("quota"));
    let (status, _) = post_json(app_with(provider.clone()), "/health_check", json!({})).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn health_check_non_string_address_is_404_without_completion() {
    for address in [json!(123), json!(["1 Test Street"]), json!({"street": "Test"})] {
        let provider = Arc::new(MockTextProvider::replying("unused"));
        let (status, body) = post_json(
            app_with(provider.clone()),
            "/health_check",
            json!({"address": address}),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"error": "Property not found"}));
        assert_eq!(provider.call_count(), 0);
    }
}

#[tokio::test]
async fn health_check_completion_failure_is_generic_500() {
    let provider = Arc::new(MockTextProvider::failing("API key not valid: sk-secret"));
    let (status, body) = post_json(
        app_with(provider),
        "/health_check",
        json!({"address": FIXTURE_ADDRESS}),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({"error": "Could not generate AI summary. Please try again."})
    );
    assert!(!body.to_string().contains("sk-secret"));
}

#[tokio::test]
async fn repeated_health_checks_return_identical_records() {
    let provider = Arc::new(MockTextProvider::replying("same"));
    let app = app_with(provider);

    let (_, first) = post_json(app.clone(), "/health_check", json!({"address": FIXTURE_ADDRESS})).await;
    let (_, second) = post_json(app, "/health_check", json!({"address": FIXTURE_ADDRESS})).await;

    assert_eq!(first["data_used"], second["data_used"]);
}

// ============================================================================
// /ask_ai
// ============================================================================

#[tokio::test]
async fn ask_ai_returns_answer() {
    let provider = Arc::new(MockTextProvider::replying("Stamp duty is a tax."));
    let (status, body) = post_json(
        app_with(provider.clone()),
        "/ask_ai",
        json!({"question": "What is stamp duty?"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"question": "What is stamp duty?", "answer": "Stamp duty is a tax."})
    );
    assert!(provider.prompts()[0].contains("What is stamp duty?"));
}

#[tokio::test]
async fn ask_ai_missing_or_empty_question_is_400() {
    for payload in [json!({}), json!({"question": ""}), json!({"question": null})] {
        let provider = Arc::new(MockTextProvider::replying("unused"));
        let (status, body) = post_json(app_with(provider.clone()), "/ask_ai", payload).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "No question provided"}));
        assert_eq!(provider.call_count(), 0);
    }
}

#[tokio::test]
async fn ask_ai_forwards_non_string_question() {
    let provider = Arc::new(MockTextProvider::replying("Forty-two what?"));
    let (status, body) = post_json(app_with(provider.clone()), "/ask_ai", json!({"question": 42})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"question": 42, "answer": "Forty-two what?"}));
    assert!(provider.prompts()[0].ends_with("Question: 42"));
}

#[tokio::test]
async fn ask_ai_falsy_question_is_400() {
    for question in [json!(0), json!(false), json!([])] {
        let provider = Arc::new(MockTextProvider::replying("unused"));
        let (status, body) =
            post_json(app_with(provider.clone()), "/ask_ai", json!({"question": question})).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "No question provided"}));
        assert_eq!(provider.call_count(), 0);
    }
}

#[tokio::test]
async fn ask_ai_completion_failure_is_generic_500() {
    let provider = Arc::new(MockTextProvider::failing("connection reset by peer"));
    let (status, body) = post_json(app_with(provider), "/ask_ai", json!({"question": "Hi?"})).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Could not get AI answer. Please try again."}));
    assert!(!body.to_string().contains("connection reset"));
}

#[tokio::test]
async fn malformed_json_is_400() {
    let provider = Arc::new(MockTextProvider::replying("unused"));
    let response = app_with(provider.clone())
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/ask_ai")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(body["error"].is_string());
    assert_eq!(provider.call_count(), 0);
}

// ============================================================================
// /get_valuation
// ============================================================================

fn valuation_body() -> Value {
    json!({
        "address": "SW1A 1AA",
        "type": "Terraced House",
        "beds": 3,
        "condition": "Good"
    })
}

#[tokio::test]
async fn valuation_splits_estimate_and_reasoning() {
    let provider = Arc::new(MockTextProvider::replying(
        "£450,000. Justification: some reason",
    ));
    let (status, body) = post_json(app_with(provider.clone()), "/get_valuation", valuation_body()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"estimate": "£450,000.", "reasoning": "some reason"}));

    let prompt = &provider.prompts()[0];
    assert!(prompt.contains("Address/Postcode: SW1A 1AA"));
    assert!(prompt.contains("Number of Bedrooms: 3"));
}

#[tokio::test]
async fn valuation_without_marker_uses_placeholder() {
    let provider = Arc::new(MockTextProvider::replying("  Roughly £500,000.  \n"));
    let (status, body) = post_json(app_with(provider), "/get_valuation", valuation_body()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "estimate": "Roughly £500,000.",
            "reasoning": "No specific reasoning provided by AI."
        })
    );
}

#[tokio::test]
async fn valuation_missing_any_field_is_400_without_completion() {
    for field in ["address", "type", "beds", "condition"] {
        let mut payload = valuation_body();
        payload.as_object_mut().unwrap().remove(field);

        let provider = Arc::new(MockTextProvider::replying("unused"));
        let (status, body) = post_json(app_with(provider.clone()), "/get_valuation", payload).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "missing {field}");
        assert_eq!(body, json!({"error": "Missing valuation details"}));
        assert_eq!(provider.call_count(), 0);
    }
}

#[tokio::test]
async fn valuation_falsy_field_is_400() {
    let mut payload = valuation_body();
    payload["condition"] = json!("");

    let provider = Arc::new(MockTextProvider::replying("unused"));
    let (status, _) = post_json(app_with(provider.clone()), "/get_valuation", payload).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn valuation_completion_failure_is_generic_500() {
    let provider = Arc::new(MockTextProvider::failing("malformed upstream payload"));
    let (status, body) = post_json(app_with(provider), "/get_valuation", valuation_body()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({"error": "Could not generate AI valuation. Please try again."})
    );
}

// ============================================================================
// Pages and probes
// ============================================================================

#[tokio::test]
async fn index_lists_catalog_addresses() {
    let catalog = StaticCatalog::simulated();
    let addresses = catalog.list_addresses();
    let app = build_router(AppState::new(
        Arc::new(catalog),
        Arc::new(MockTextProvider::echo()),
    ));

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers().get(header::CONTENT_TYPE).unwrap();
    assert!(content_type.to_str().unwrap().starts_with("text/html"));

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    for address in addresses {
        assert!(html.contains(&address), "page should list {address}");
    }
}

#[tokio::test]
async fn health_probe_reports_ok_and_request_id() {
    let provider = Arc::new(MockTextProvider::echo());
    let response = app_with(provider.clone())
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "homesense-service");
    assert_eq!(provider.call_count(), 0);
}
