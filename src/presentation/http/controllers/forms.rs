// src/presentation/http/controllers/forms.rs
//! Multipart form decoding shared by the article and upload endpoints.
use axum::extract::{
    Multipart,
    multipart::{Field, MultipartError},
};
use chrono::{DateTime, Utc};
use utoipa::ToSchema;

use crate::application::commands::{articles::ArticleInput, uploads::ImageUpload};
use crate::presentation::http::error::{HttpError, HttpResult};

/// The `thumbnail` part carries either a new image or the URL already in use.
#[derive(Debug, Clone)]
pub enum ThumbnailPart {
    Url(String),
    File(ImageUpload),
}

/// Multipart body of `POST /api/v1/news` and `PUT /api/v1/news/{id}`.
#[derive(Debug, Clone, Default, ToSchema)]
pub struct ArticleForm {
    pub category_id: String,
    pub title: String,
    pub excerpt: Option<String>,
    /// HTML produced by the editor. It is sanitized before storage.
    pub content: String,
    #[schema(value_type = Option<String>, format = Binary)]
    pub thumbnail: Option<ThumbnailPart>,
    #[schema(value_type = Option<String>, example = "true")]
    pub is_featured: bool,
    #[schema(example = "published")]
    pub status: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
}

impl ArticleForm {
    pub async fn from_multipart(mut multipart: Multipart) -> HttpResult<Self> {
        let mut form = Self::default();
        while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
            let name = field.name().unwrap_or_default().to_string();
            match name.as_str() {
                "thumbnail" => form.thumbnail = read_thumbnail(field).await?,
                "category_id" => form.category_id = read_text(field).await?,
                "title" => form.title = read_text(field).await?,
                "excerpt" => form.excerpt = Some(read_text(field).await?),
                "content" => form.content = read_text(field).await?,
                "is_featured" => form.is_featured = parse_bool(&read_text(field).await?).unwrap_or(false),
                "status" => form.status = Some(read_text(field).await?),
                "published_at" => form.published_at = parse_timestamp(&read_text(field).await?)?,
                "meta_title" => form.meta_title = Some(read_text(field).await?),
                "meta_description" => form.meta_description = Some(read_text(field).await?),
                _ => {}
            }
        }
        Ok(form)
    }

    pub fn into_input(self) -> ArticleInput {
        let (thumbnail, thumbnail_upload) = match self.thumbnail {
            Some(ThumbnailPart::Url(url)) => (Some(url), None),
            Some(ThumbnailPart::File(upload)) => (None, Some(upload)),
            None => (None, None),
        };

        ArticleInput {
            category_id: self.category_id,
            title: self.title,
            excerpt: self.excerpt,
            content: self.content,
            thumbnail,
            thumbnail_upload,
            is_featured: self.is_featured,
            status: self.status,
            published_at: self.published_at,
            meta_title: self.meta_title,
            meta_description: self.meta_description,
        }
    }
}

/// Reads the first file part named `file` or `image`.
pub async fn read_image_upload(mut multipart: Multipart) -> HttpResult<ImageUpload> {
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if matches!(field.name(), Some("file" | "image")) {
            return read_file(field).await;
        }
    }
    Err(HttpError::bad_request("missing file field"))
}

async fn read_thumbnail(field: Field<'_>) -> HttpResult<Option<ThumbnailPart>> {
    if field.file_name().is_some() {
        let upload = read_file(field).await?;
        // Browsers submit an empty file part when nothing was picked.
        if upload.bytes.is_empty() && upload.filename.is_empty() {
            return Ok(None);
        }
        return Ok(Some(ThumbnailPart::File(upload)));
    }

    let url = read_text(field).await?;
    Ok((!url.trim().is_empty()).then_some(ThumbnailPart::Url(url)))
}

async fn read_file(field: Field<'_>) -> HttpResult<ImageUpload> {
    let filename = field.file_name().unwrap_or_default().to_string();
    let content_type = field
        .content_type()
        .unwrap_or("application/octet-stream")
        .to_string();
    let bytes = field.bytes().await.map_err(multipart_error)?;
    Ok(ImageUpload {
        filename,
        content_type,
        bytes,
    })
}

async fn read_text(field: Field<'_>) -> HttpResult<String> {
    field.text().await.map_err(multipart_error)
}

fn multipart_error(err: MultipartError) -> HttpError {
    HttpError::with_status(err.status(), err.body_text())
}

fn parse_timestamp(raw: &str) -> HttpResult<Option<DateTime<Utc>>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    DateTime::parse_from_rfc3339(raw)
        .map(|ts| Some(ts.with_timezone(&Utc)))
        .map_err(|_| HttpError::bad_request("published_at must be an RFC 3339 timestamp"))
}

/// Accepts the usual spellings of a boolean flag. Anything else is `None`.
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim() {
        "1" | "t" | "T" | "true" | "TRUE" | "True" | "on" => Some(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" | "off" => Some(false),
        _ => None,
    }
}
