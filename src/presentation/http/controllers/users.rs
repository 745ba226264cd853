// src/presentation/http/controllers/users.rs
use crate::application::{
    commands::owners::{ChangePasswordCommand, RegisterOwnerCommand},
    dto::OwnerDto,
};
use crate::domain::owner::Role;
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::openapi::StatusResponse;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    /// `admin` or `editor`. Defaults to `editor`.
    #[serde(default)]
    pub role: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ChangePasswordRequest {
    #[serde(default)]
    pub old_password: String,
    #[serde(default)]
    pub new_password: String,
}

#[utoipa::path(
    get,
    path = "/api/v1/users",
    responses((status = 200, description = "All owners, newest first.", body = [OwnerDto])),
    tag = "Users"
)]
pub async fn list_users(
    Extension(state): Extension<HttpState>,
    Authenticated(_owner): Authenticated,
) -> HttpResult<Json<Vec<OwnerDto>>> {
    state
        .services
        .owner_queries
        .list_owners()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/users",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Owner created.", body = OwnerDto),
        (status = 409, description = "Email already registered.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn register_user(
    Extension(state): Extension<HttpState>,
    Authenticated(_owner): Authenticated,
    Json(payload): Json<RegisterRequest>,
) -> HttpResult<(StatusCode, Json<OwnerDto>)> {
    let role = payload
        .role
        .as_deref()
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .map(str::parse::<Role>)
        .transpose()
        .map_err(|err| HttpError::from_error(err.into()))?;

    let created = state
        .services
        .owner_commands
        .register(RegisterOwnerCommand {
            name: payload.name,
            email: payload.email,
            password: payload.password,
            role,
        })
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    post,
    path = "/api/v1/users/change-password",
    request_body = ChangePasswordRequest,
    responses(
        (status = 200, description = "Password changed.", body = StatusResponse),
        (status = 401, description = "Old password did not match.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn change_password(
    Extension(state): Extension<HttpState>,
    Authenticated(owner): Authenticated,
    Json(payload): Json<ChangePasswordRequest>,
) -> HttpResult<Json<StatusResponse>> {
    state
        .services
        .owner_commands
        .change_password(
            &owner,
            ChangePasswordCommand {
                old_password: payload.old_password,
                new_password: payload.new_password,
            },
        )
        .await
        .into_http()?;

    Ok(Json(StatusResponse::new("password updated")))
}
