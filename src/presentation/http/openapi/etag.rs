// src/presentation/http/openapi/etag.rs
use axum::http::{HeaderMap, header};

/// Opaque part of an entity tag: the weak prefix and quotes removed.
fn opaque(token: &str) -> &str {
    let token = token.trim();
    let token = token
        .strip_prefix("W/")
        .or_else(|| token.strip_prefix("w/"))
        .unwrap_or(token);
    token
        .strip_prefix('"')
        .and_then(|t| t.strip_suffix('"'))
        .unwrap_or(token)
}

/// Weak comparison: `W/"a"` and `"a"` are equal.
pub fn weak_match(a: &str, b: &str) -> bool {
    opaque(a) == opaque(b)
}

/// Whether `If-None-Match` names `actual`, directly, in a list, or via `*`.
pub fn inm_matches(headers: &HeaderMap, actual: &str) -> bool {
    let Some(value) = headers
        .get(header::IF_NONE_MATCH)
        .and_then(|v| v.to_str().ok())
    else {
        return false;
    };

    let value = value.trim();
    value == "*" || value.split(',').any(|candidate| weak_match(candidate, actual))
}
