// src/presentation/http/controllers/news.rs
use crate::application::{
    commands::articles::{CreateArticleCommand, DeleteArticleCommand, UpdateArticleCommand},
    dto::{ArticleDto, ArticlePage, HomepageDto, SlugCheckDto},
    queries::articles::{CheckSlugQuery, GetArticleBySlugQuery, ListArticlesQuery},
};
use crate::presentation::http::controllers::forms::{ArticleForm, parse_bool};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::openapi::StatusResponse;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Multipart, Path, Query},
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::IntoParams;

/// Listing parameters. Values that do not parse are treated as absent.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct NewsListParams {
    /// 1-based page number.
    pub page: Option<String>,
    /// Page size, capped at 100.
    pub limit: Option<String>,
    /// Category slug.
    pub category: Option<String>,
    /// `latest` (default), `oldest`, `popular`/`views_desc` or `views_asc`.
    pub sort: Option<String>,
    pub featured: Option<String>,
    /// Case-insensitive title substring.
    pub search: Option<String>,
    pub author_id: Option<String>,
}

impl From<NewsListParams> for ListArticlesQuery {
    fn from(params: NewsListParams) -> Self {
        let number = |raw: Option<String>| raw.and_then(|v| v.trim().parse::<i64>().ok());
        Self {
            page: number(params.page),
            limit: number(params.limit),
            category: params.category,
            author_id: params.author_id,
            sort: params.sort,
            featured: params.featured.as_deref().and_then(parse_bool),
            search: params.search,
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CheckSlugParams {
    #[serde(default)]
    pub slug: String,
}

#[utoipa::path(
    get,
    path = "/api/v1/news",
    params(NewsListParams),
    responses((status = 200, description = "Published articles, newest first by default.", body = ArticlePage)),
    tag = "News"
)]
pub async fn list_news(
    Extension(state): Extension<HttpState>,
    Query(params): Query<NewsListParams>,
) -> HttpResult<Json<ArticlePage>> {
    state
        .services
        .article_queries
        .list_articles(params.into())
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/news/homepage",
    responses((status = 200, description = "Featured, latest and popular articles.", body = HomepageDto)),
    tag = "News"
)]
pub async fn homepage(Extension(state): Extension<HttpState>) -> HttpResult<Json<HomepageDto>> {
    state
        .services
        .article_queries
        .homepage()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/news/check-slug",
    params(CheckSlugParams),
    responses(
        (status = 200, description = "Whether the slug is taken.", body = SlugCheckDto),
        (status = 400, description = "Missing slug.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "News"
)]
pub async fn check_slug(
    Extension(state): Extension<HttpState>,
    Query(params): Query<CheckSlugParams>,
) -> HttpResult<Json<SlugCheckDto>> {
    state
        .services
        .article_queries
        .check_slug(CheckSlugQuery { slug: params.slug })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/news/{slug}",
    params(("slug" = String, Path, description = "Article slug")),
    responses(
        (status = 200, description = "The article. Each read counts as a view.", body = ArticleDto),
        (status = 404, description = "Unknown slug.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "News"
)]
pub async fn get_news(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_queries
        .get_article_by_slug(GetArticleBySlugQuery { slug })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/news",
    request_body(content = ArticleForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Article created.", body = ArticleDto),
        (status = 400, description = "Invalid form.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Missing or invalid token.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "News"
)]
pub async fn create_news(
    Extension(state): Extension<HttpState>,
    Authenticated(owner): Authenticated,
    multipart: Multipart,
) -> HttpResult<(StatusCode, Json<ArticleDto>)> {
    let form = ArticleForm::from_multipart(multipart).await?;
    let created = state
        .services
        .article_commands
        .create_article(
            &owner,
            CreateArticleCommand {
                input: form.into_input(),
            },
        )
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put,
    path = "/api/v1/news/{id}",
    params(("id" = String, Path, description = "Article id")),
    request_body(content = ArticleForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Article replaced. The slug is kept.", body = ArticleDto),
        (status = 404, description = "Unknown article.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "News"
)]
pub async fn update_news(
    Extension(state): Extension<HttpState>,
    Authenticated(_owner): Authenticated,
    Path(id): Path<String>,
    multipart: Multipart,
) -> HttpResult<Json<ArticleDto>> {
    let form = ArticleForm::from_multipart(multipart).await?;
    state
        .services
        .article_commands
        .update_article(UpdateArticleCommand {
            id,
            input: form.into_input(),
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/news/{id}",
    params(("id" = String, Path, description = "Article id")),
    responses(
        (status = 200, description = "Article deleted.", body = StatusResponse),
        (status = 404, description = "Unknown article.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "News"
)]
pub async fn delete_news(
    Extension(state): Extension<HttpState>,
    Authenticated(_owner): Authenticated,
    Path(id): Path<String>,
) -> HttpResult<Json<StatusResponse>> {
    state
        .services
        .article_commands
        .delete_article(DeleteArticleCommand { id })
        .await
        .into_http()?;

    Ok(Json(StatusResponse::new("deleted")))
}
