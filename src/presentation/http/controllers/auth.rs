// src/presentation/http/controllers/auth.rs
use crate::application::{
    commands::owners::LoginCommand,
    dto::{LoginResponseDto, OwnerDto},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Signed bearer token and the owner profile.", body = LoginResponseDto),
        (status = 401, description = "Invalid credentials.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(()),
    tag = "Auth"
)]
pub async fn login(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<LoginRequest>,
) -> HttpResult<Json<LoginResponseDto>> {
    state
        .services
        .owner_commands
        .login(LoginCommand {
            email: payload.email,
            password: payload.password,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/auth/me",
    responses(
        (status = 200, description = "The authenticated owner.", body = OwnerDto),
        (status = 401, description = "Missing or invalid token.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Auth"
)]
pub async fn me(
    Extension(state): Extension<HttpState>,
    Authenticated(owner): Authenticated,
) -> HttpResult<Json<OwnerDto>> {
    state
        .services
        .owner_queries
        .get_profile(&owner)
        .await
        .into_http()
        .map(Json)
}
