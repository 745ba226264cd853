// src/presentation/http/openapi/handlers.rs
use axum::{
    body::Body,
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
};

fn not_modified_response() -> Response {
    (
        StatusCode::NOT_MODIFIED,
        [(header::ETAG, super::openapi_etag())],
    )
        .into_response()
}

fn ok_response(body: Body) -> Response {
    (
        StatusCode::OK,
        [
            (header::ETAG, super::openapi_etag().to_string()),
            (header::CONTENT_TYPE, super::OPENAPI_CONTENT_TYPE_JSON.to_string()),
            (header::CONTENT_LENGTH, super::openapi_content_length().to_string()),
        ],
        body,
    )
        .into_response()
}

/// GET /openapi.json. A matching `If-None-Match` yields 304.
pub async fn serve_openapi(headers: HeaderMap) -> Response {
    if super::inm_matches(&headers, super::openapi_etag()) {
        return not_modified_response();
    }
    ok_response(Body::from(super::openapi_bytes().clone()))
}

/// HEAD /openapi.json. Same headers as GET with an empty body.
pub async fn head_openapi(headers: HeaderMap) -> Response {
    if super::inm_matches(&headers, super::openapi_etag()) {
        return not_modified_response();
    }
    ok_response(Body::empty())
}
