//! Common test utilities

use std::sync::Arc;

use axum::body::{Body, Bytes};
use axum::Router;
use http::{HeaderMap, Method, Request, StatusCode};
use item_daemon::store::{demo_items, ItemStore, MemoryStore};
use item_daemon::{build_router, ItemResource};
use tower::ServiceExt;

/// A response reduced to what the tests look at.
#[allow(dead_code)] // Test utility for integration tests
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    /// Parse the body as JSON, panicking on anything else
    #[allow(dead_code)] // Test utility for integration tests
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("Response body should be JSON")
    }

    #[allow(dead_code)] // Test utility for integration tests
    pub fn text(&self) -> String {
        String::from_utf8(self.body.to_vec()).expect("Response body should be UTF-8")
    }
}

/// Router over an empty in-memory store
#[allow(dead_code)] // Test utility for integration tests
pub fn memory_app() -> Router {
    app_with_store(Arc::new(MemoryStore::new()))
}

/// Router over an in-memory store holding the demo items
#[allow(dead_code)] // Test utility for integration tests
pub fn seeded_app() -> Router {
    app_with_store(Arc::new(MemoryStore::with_items(demo_items())))
}

/// Router over an arbitrary store
#[allow(dead_code)] // Test utility for integration tests
pub fn app_with_store(store: Arc<dyn ItemStore>) -> Router {
    build_router(ItemResource::new(store))
}

/// Send one request through `app` and collect the response.
#[allow(dead_code)] // Test utility for integration tests
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<&str>) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    if body.is_some() {
        builder = builder.header(http::header::CONTENT_TYPE, "application/json");
    }
    let request = builder
        .body(body.map_or_else(Body::empty, |b| Body::from(b.to_string())))
        .expect("Failed to build request");

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("Router should not fail");

    let status = response.status();
    let headers = response.headers().clone();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");

    TestResponse {
        status,
        headers,
        body,
    }
}
