// src/presentation/http/openapi.rs
mod etag;
mod handlers;
#[cfg(test)]
mod tests;

use axum::{Router, routing::get};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufWriter, path::Path, sync::OnceLock};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
};
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};

pub use etag::{inm_matches, weak_match};
pub use handlers::{head_openapi, serve_openapi};

pub const OPENAPI_CONTENT_TYPE_JSON: &str = "application/json";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::auth::login,
        crate::presentation::http::controllers::auth::me,
        crate::presentation::http::controllers::users::list_users,
        crate::presentation::http::controllers::users::register_user,
        crate::presentation::http::controllers::users::change_password,
        crate::presentation::http::controllers::news::list_news,
        crate::presentation::http::controllers::news::homepage,
        crate::presentation::http::controllers::news::check_slug,
        crate::presentation::http::controllers::news::get_news,
        crate::presentation::http::controllers::news::create_news,
        crate::presentation::http::controllers::news::update_news,
        crate::presentation::http::controllers::news::delete_news,
        crate::presentation::http::controllers::categories::list_categories,
        crate::presentation::http::controllers::categories::create_category,
        crate::presentation::http::controllers::categories::update_category,
        crate::presentation::http::controllers::categories::delete_category,
        crate::presentation::http::controllers::stats::dashboard,
        crate::presentation::http::controllers::uploads::upload_image,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::auth::LoginRequest,
            crate::presentation::http::controllers::users::RegisterRequest,
            crate::presentation::http::controllers::users::ChangePasswordRequest,
            crate::presentation::http::controllers::categories::CategoryRequest,
            crate::presentation::http::controllers::forms::ArticleForm,
            crate::presentation::http::controllers::uploads::UploadForm,
            crate::presentation::http::controllers::uploads::UploadResponse,
            crate::application::dto::ArticleDto,
            crate::application::dto::ArticlePage,
            crate::application::dto::HomepageDto,
            crate::application::dto::SlugCheckDto,
            crate::application::dto::CategoryDto,
            crate::application::dto::OwnerDto,
            crate::application::dto::LoginResponseDto,
            crate::application::dto::DashboardStatsDto,
            crate::application::dto::CategoryStatDto,
            crate::application::dto::TopArticleDto
        )
    ),
    tags(
        (name = "Auth", description = "Login and the current owner"),
        (name = "Users", description = "Staff account management"),
        (name = "News", description = "Public listings and article management"),
        (name = "Categories", description = "Category management"),
        (name = "Stats", description = "Dashboard statistics"),
        (name = "Uploads", description = "Image uploads to object storage"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    security(("bearerAuth" = [])),
    info(
        title = "Newsroom API",
        description = "News portal CMS backend",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        let mut http = Http::new(HttpAuthScheme::Bearer);
        http.bearer_format = Some("JWT".into());
        components.add_security_scheme("bearerAuth", SecurityScheme::Http(http));
    }
}

/// Serialized document, rendered once per process.
pub fn openapi_bytes() -> &'static Bytes {
    static BYTES: OnceLock<Bytes> = OnceLock::new();
    BYTES.get_or_init(|| match ApiDoc::openapi().to_json() {
        Ok(json) => Bytes::from(json),
        Err(err) => {
            tracing::error!(error = %err, "failed to serialize OpenAPI document");
            Bytes::from_static(b"{}")
        }
    })
}

/// Quoted blake3 digest of [`openapi_bytes`].
pub fn openapi_etag() -> &'static str {
    static ETAG: OnceLock<String> = OnceLock::new();
    ETAG.get_or_init(|| format!("\"{}\"", blake3::hash(openapi_bytes()).to_hex()))
}

pub fn openapi_content_length() -> usize {
    openapi_bytes().len()
}

pub fn docs_router() -> Router {
    let redoc = Redoc::with_url("/redoc", ApiDoc::openapi());
    Router::new()
        .route("/openapi.json", get(serve_openapi).head(head_openapi))
        .merge(redoc)
}

pub fn write_openapi_snapshot(output_path: &Path) -> std::io::Result<()> {
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(output_path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &ApiDoc::openapi())?;
    Ok(())
}
