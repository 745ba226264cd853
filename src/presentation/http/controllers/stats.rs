// src/presentation/http/controllers/stats.rs
use crate::application::dto::DashboardStatsDto;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};

#[utoipa::path(
    get,
    path = "/api/v1/stats",
    responses((status = 200, description = "Dashboard totals and rankings.", body = DashboardStatsDto)),
    security(()),
    tag = "Stats"
)]
pub async fn dashboard(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<DashboardStatsDto>> {
    state
        .services
        .stats_queries
        .dashboard()
        .await
        .into_http()
        .map(Json)
}
