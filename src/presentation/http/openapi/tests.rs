// src/presentation/http/openapi/tests.rs
use super::*;
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};

#[test]
fn weak_match_handles_strong_and_weak_tags() {
    assert!(weak_match(r#"W/"abc""#, r#""abc""#));
    assert!(weak_match(r#""abc""#, r#"w/"abc""#));
    assert!(!weak_match(r#""abc""#, r#""def""#));
}

#[test]
fn inm_matches_star_and_lists() {
    let mut headers = HeaderMap::new();
    headers.insert(header::IF_NONE_MATCH, HeaderValue::from_static("*"));
    assert!(inm_matches(&headers, r#""anything""#));

    headers.insert(
        header::IF_NONE_MATCH,
        HeaderValue::from_static(r#""foo", W/"bar""#),
    );
    assert!(inm_matches(&headers, r#""bar""#));
    assert!(!inm_matches(&headers, r#""baz""#));
    assert!(!inm_matches(&HeaderMap::new(), r#""bar""#));
}

#[test]
fn etag_is_a_quoted_blake3_digest() {
    let etag = openapi_etag();
    assert!(etag.starts_with('"') && etag.ends_with('"'));
    assert_eq!(etag.len(), 64 + 2);
}

#[test]
fn document_lists_public_routes() {
    let doc: serde_json::Value = serde_json::from_slice(openapi_bytes()).unwrap();
    let paths = doc["paths"].as_object().unwrap();
    for path in [
        "/health",
        "/api/v1/news",
        "/api/v1/news/homepage",
        "/api/v1/news/{slug}",
        "/api/v1/categories",
        "/api/v1/stats",
        "/api/v1/auth/login",
        "/api/v1/upload",
    ] {
        assert!(paths.contains_key(path), "missing {path}");
    }
}

#[tokio::test]
async fn serve_openapi_returns_not_modified_when_if_none_match_matches() {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::IF_NONE_MATCH,
        HeaderValue::from_static(openapi_etag()),
    );
    let resp = serve_openapi(headers).await;
    assert_eq!(resp.status(), StatusCode::NOT_MODIFIED);
    assert!(resp.headers().get(header::ETAG).is_some());
}

#[tokio::test]
async fn serve_openapi_returns_document_on_mismatch() {
    let mut headers = HeaderMap::new();
    headers.insert(header::IF_NONE_MATCH, HeaderValue::from_static("\"stale\""));
    let resp = serve_openapi(headers).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(header::CONTENT_TYPE).unwrap(),
        OPENAPI_CONTENT_TYPE_JSON
    );
}

#[tokio::test]
async fn head_openapi_sets_content_length() {
    let resp = head_openapi(HeaderMap::new()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let length = resp.headers().get(header::CONTENT_LENGTH).unwrap();
    assert_eq!(length.to_str().unwrap(), openapi_content_length().to_string());
}
