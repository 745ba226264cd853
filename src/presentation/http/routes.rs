// src/presentation/http/routes.rs
use crate::config::RateLimitConfig;
use crate::presentation::http::middleware::rate_limit::{ClientRateLimiter, rate_limit};
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{auth, categories, news, stats, uploads, users},
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method, header},
    middleware,
    routing::{get, post, put},
};
use std::{sync::Arc, time::Duration};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

/// Multipart forms carry images; the cap matches the upload form limit.
pub const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Router options that come from configuration.
#[derive(Debug, Clone, Default)]
pub struct RouterOptions {
    /// Empty allows any origin.
    pub allowed_origins: Vec<String>,
    /// `None` disables per-client rate limiting.
    pub rate_limit: Option<RateLimitConfig>,
}

pub fn build_router(state: HttpState) -> Router {
    build_router_with_options(
        state,
        RouterOptions {
            allowed_origins: Vec::new(),
            rate_limit: Some(RateLimitConfig::default()),
        },
    )
}

pub fn build_router_with_options(state: HttpState, options: RouterOptions) -> Router {
    let router = Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .route("/api/v1/auth/login", post(auth::login))
        .route("/api/v1/auth/me", get(auth::me))
        .route(
            "/api/v1/users",
            get(users::list_users).post(users::register_user),
        )
        .route("/api/v1/users/change-password", post(users::change_password))
        .route(
            "/api/v1/news",
            get(news::list_news).post(news::create_news),
        )
        .route("/api/v1/news/homepage", get(news::homepage))
        .route("/api/v1/news/check-slug", get(news::check_slug))
        // One segment serves reads by slug and writes by id.
        .route(
            "/api/v1/news/{slug}",
            get(news::get_news)
                .put(news::update_news)
                .delete(news::delete_news),
        )
        .route(
            "/api/v1/categories",
            get(categories::list_categories).post(categories::create_category),
        )
        .route(
            "/api/v1/categories/{id}",
            put(categories::update_category).delete(categories::delete_category),
        )
        .route("/api/v1/stats", get(stats::dashboard))
        .route("/api/v1/upload", post(uploads::upload_image))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES));

    let router = match options.rate_limit {
        Some(config) => {
            let limiter = Arc::new(ClientRateLimiter::new(config));
            router.layer(middleware::from_fn_with_state(limiter, rate_limit))
        }
        None => router,
    };

    router
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&options.allowed_origins))
        .layer(Extension(state))
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .max_age(Duration::from_secs(300));

    if origins.is_empty() {
        layer.allow_origin(Any).allow_headers(Any)
    } else {
        layer
            .allow_origin(AllowOrigin::list(origins))
            .allow_headers([header::ACCEPT, header::AUTHORIZATION, header::CONTENT_TYPE])
            .allow_credentials(true)
    }
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    security(()),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse::new("ok"))
}
