// src/presentation/http/controllers/uploads.rs
use crate::presentation::http::controllers::forms::read_image_upload;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Multipart};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct UploadResponse {
    pub url: String,
}

/// Multipart body with one image part named `file`.
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct UploadForm {
    #[schema(value_type = String, format = Binary)]
    file: Vec<u8>,
}

#[utoipa::path(
    post,
    path = "/api/v1/upload",
    request_body(content = UploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Public URL of the stored image.", body = UploadResponse),
        (status = 400, description = "Not an image.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Uploads"
)]
pub async fn upload_image(
    Extension(state): Extension<HttpState>,
    Authenticated(_owner): Authenticated,
    multipart: Multipart,
) -> HttpResult<Json<UploadResponse>> {
    let upload = read_image_upload(multipart).await?;
    let url = state
        .services
        .uploads
        .upload_image(upload)
        .await
        .into_http()?;

    Ok(Json(UploadResponse { url }))
}
