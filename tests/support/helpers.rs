// tests/support/helpers.rs
use std::sync::Arc;

use axum::body::{self, Body};
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use serde_json::Value;

use newsroom_core::application::services::{Adapters, ApplicationServices, Repositories};
use newsroom_core::infrastructure::{sanitizer::AmmoniaSanitizer, util::DefaultSlugGenerator};
use newsroom_core::presentation::http::{
    routes::{RouterOptions, build_router_with_options},
    state::HttpState,
};

use super::mocks::{
    DummyTokenManager, FixedClock, InMemoryNewsroom, PlainPasswordHasher, RecordingStorage,
    TEST_TOKEN,
};

/// Services over in-memory storage, plus handles for seeding and inspection.
pub struct TestApp {
    pub store: Arc<InMemoryNewsroom>,
    pub storage: Arc<RecordingStorage>,
    pub services: Arc<ApplicationServices>,
}

impl TestApp {
    pub fn new() -> Self {
        let store = Arc::new(InMemoryNewsroom::default());
        let storage = Arc::new(RecordingStorage::default());

        let repos = Repositories {
            article_write: store.clone(),
            article_read: store.clone(),
            article_stats: store.clone(),
            categories: store.clone(),
            owners: store.clone(),
        };
        let adapters = Adapters {
            password_hasher: Arc::new(PlainPasswordHasher),
            token_manager: Arc::new(DummyTokenManager),
            clock: Arc::new(FixedClock::default()),
            slugger: Arc::new(DefaultSlugGenerator),
            sanitizer: Arc::new(AmmoniaSanitizer::new()),
            storage: storage.clone(),
        };

        Self {
            store,
            storage,
            services: Arc::new(ApplicationServices::new(repos, adapters)),
        }
    }

    /// Router without rate limiting and with permissive CORS.
    pub fn router(&self) -> axum::Router {
        build_router_with_options(
            HttpState {
                services: Arc::clone(&self.services),
            },
            RouterOptions::default(),
        )
    }
}

pub fn make_test_router() -> axum::Router {
    TestApp::new().router()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn authed(method: &str, uri: &str, body: Body) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {TEST_TOKEN}"))
        .body(body)
        .unwrap()
}

pub fn authed_json(method: &str, uri: &str, json: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {TEST_TOKEN}"))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json.to_string()))
        .unwrap()
}

pub const BOUNDARY: &str = "newsroom-test-boundary";

/// Encodes text fields and optional file parts as `multipart/form-data`.
pub fn multipart_body(fields: &[(&str, &str)], files: &[(&str, &str, &str, &[u8])]) -> Body {
    let mut out = Vec::new();
    for (name, value) in fields {
        out.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    for (name, filename, content_type, bytes) in files {
        out.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\nContent-Type: {content_type}\r\n\r\n"
            )
            .as_bytes(),
        );
        out.extend_from_slice(bytes);
        out.extend_from_slice(b"\r\n");
    }
    out.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    Body::from(out)
}

pub fn authed_multipart(method: &str, uri: &str, body: Body) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {TEST_TOKEN}"))
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(body)
        .unwrap()
}

pub async fn body_json(resp: Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(resp: Response, expected_status: StatusCode, expected_error: &str) {
    assert_eq!(resp.status(), expected_status);
    let content_type = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(
        content_type.starts_with("application/json"),
        "unexpected content-type: {content_type}"
    );
    let json = body_json(resp).await;
    assert_eq!(json["error"], expected_error);
    assert!(
        json["message"].as_str().is_some_and(|m| !m.is_empty()),
        "expected non-empty message field"
    );
}
