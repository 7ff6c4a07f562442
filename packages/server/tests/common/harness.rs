// Test harness for HTTP-level tests
//
// Wires mock collaborators into the real router and offers small helpers for
// sending JSON requests and reading JSON responses.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use blog_core::kernel::{MockArticleGenerator, MockRestaurantExtractor, ServerDeps};
use blog_core::server::{build_app, AppOptions};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

pub struct TestHarness {
    pub extractor: MockRestaurantExtractor,
    pub generator: MockArticleGenerator,
    app: Router,
}

impl TestHarness {
    pub fn new(extractor: MockRestaurantExtractor, generator: MockArticleGenerator) -> Self {
        Self::with_options(extractor, generator, AppOptions::default())
    }

    pub fn with_options(
        extractor: MockRestaurantExtractor,
        generator: MockArticleGenerator,
        options: AppOptions,
    ) -> Self {
        let deps = ServerDeps::new(Arc::new(extractor.clone()), Arc::new(generator.clone()));
        Self {
            extractor,
            generator,
            app: build_app(deps, options),
        }
    }

    /// POST a JSON body to `/generate`.
    pub async fn generate(&self, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri("/generate")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    /// POST raw bytes to `/generate` with a JSON content type.
    pub async fn generate_raw(&self, body: &'static str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri("/generate")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap();
        self.send(request).await
    }

    /// POST a body to `/generate` without any content type.
    pub async fn generate_untyped(&self, body: &'static str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri("/generate")
            .body(Body::from(body))
            .unwrap();
        self.send(request).await
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, json)
    }
}
