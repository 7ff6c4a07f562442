// HTTP tests for POST /generate and GET /health

mod common;

use std::time::Duration;

use axum::http::StatusCode;
use blog_core::kernel::{MockArticleGenerator, MockRestaurantExtractor};
use blog_core::server::AppOptions;
use common::*;
use serde_json::json;

fn cafe_luna_harness() -> TestHarness {
    TestHarness::new(
        MockRestaurantExtractor::returning(cafe_luna_record()),
        MockArticleGenerator::returning(cafe_luna_articles()),
    )
}

#[tokio::test]
async fn generate_returns_restaurant_and_articles() {
    init_tracing();
    let harness = cafe_luna_harness();

    let (status, body) = harness
        .generate(json!({ "googleMapsUrl": CAFE_LUNA_URL }))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "restaurant": { "name": "Cafe Luna", "address": "12 Elm St" },
            "articles": [{ "title": "Why Cafe Luna Shines" }],
        })
    );
    assert_eq!(harness.extractor.calls(), vec![CAFE_LUNA_URL.to_string()]);
    assert_eq!(harness.generator.call_count(), 1);
}

#[tokio::test]
async fn generate_ignores_unknown_fields() {
    let harness = cafe_luna_harness();

    let (status, _) = harness
        .generate(json!({ "googleMapsUrl": CAFE_LUNA_URL, "tone": "casual" }))
        .await;

    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn missing_url_is_a_bad_request() {
    let harness = cafe_luna_harness();

    for body in [
        json!({}),
        json!({ "googleMapsUrl": null }),
        json!({ "googleMapsUrl": "" }),
        json!({ "googleMapsUrl": "   " }),
    ] {
        let (status, response) = harness.generate(body.clone()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body: {}", body);
        assert_eq!(response, json!({ "error": "Missing googleMapsUrl" }));
    }

    assert_eq!(harness.extractor.call_count(), 0);
    assert_eq!(harness.generator.call_count(), 0);
}

#[tokio::test]
async fn malformed_json_is_a_bad_request() {
    let harness = cafe_luna_harness();

    let (status, body) = harness.generate_raw("{\"googleMapsUrl\": ").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Invalid request body" }));
    assert_eq!(harness.extractor.call_count(), 0);
}

#[tokio::test]
async fn body_without_json_content_type_counts_as_missing_url() {
    let harness = cafe_luna_harness();

    let (status, body) = harness
        .generate_untyped("{\"googleMapsUrl\": \"https://maps.example/place/123\"}")
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Missing googleMapsUrl" }));
    assert_eq!(harness.extractor.call_count(), 0);
}

#[tokio::test]
async fn wrongly_typed_url_is_a_bad_request() {
    let harness = cafe_luna_harness();

    let (status, body) = harness.generate(json!({ "googleMapsUrl": 42 })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Invalid request body" }));
}

#[tokio::test]
async fn extraction_failure_hides_the_cause() {
    let harness = TestHarness::new(
        MockRestaurantExtractor::failing("apify token rejected"),
        MockArticleGenerator::new(),
    );

    let (status, body) = harness
        .generate(json!({ "googleMapsUrl": CAFE_LUNA_URL }))
        .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Generation failed" }));
    assert!(!body.to_string().contains("apify"));
    assert_eq!(harness.generator.call_count(), 0);
}

#[tokio::test]
async fn generation_failure_is_a_server_error() {
    let harness = TestHarness::new(
        MockRestaurantExtractor::returning(cafe_luna_record()),
        MockArticleGenerator::failing("rate limited"),
    );

    let (status, body) = harness
        .generate(json!({ "googleMapsUrl": CAFE_LUNA_URL }))
        .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Generation failed" }));
}

#[tokio::test]
async fn panicking_collaborator_is_a_server_error() {
    let harness = TestHarness::new(
        MockRestaurantExtractor::panicking("boom"),
        MockArticleGenerator::new(),
    );

    let (status, body) = harness
        .generate(json!({ "googleMapsUrl": CAFE_LUNA_URL }))
        .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Generation failed" }));
}

#[tokio::test]
async fn slow_generation_times_out() {
    let harness = TestHarness::with_options(
        MockRestaurantExtractor::returning(cafe_luna_record()),
        MockArticleGenerator::new().delayed(Duration::from_secs(30)),
        AppOptions {
            request_timeout: Duration::from_millis(50),
            ..AppOptions::default()
        },
    );

    let (status, _) = harness
        .generate(json!({ "googleMapsUrl": CAFE_LUNA_URL }))
        .await;

    assert_eq!(status, StatusCode::REQUEST_TIMEOUT);
    assert_eq!(harness.generator.call_count(), 1);
}

#[tokio::test]
async fn health_reports_version() {
    let harness = cafe_luna_harness();

    let (status, body) = harness.get("/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn get_on_generate_is_not_allowed() {
    let harness = cafe_luna_harness();

    let (status, _) = harness.get("/generate").await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}
