// src/application/commands/articles/input.rs
use chrono::{DateTime, Utc};

use super::ArticleCommandService;
use crate::{
    application::{
        commands::uploads::ImageUpload,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{ArticleBody, ArticleStatus, ArticleTitle},
        category::CategoryId,
    },
};

/// Editable article fields as submitted by the editor form.
#[derive(Debug, Clone, Default)]
pub struct ArticleInput {
    pub category_id: String,
    pub title: String,
    pub excerpt: Option<String>,
    pub content: String,
    /// Existing thumbnail URL. Ignored when `thumbnail_upload` is present.
    pub thumbnail: Option<String>,
    pub thumbnail_upload: Option<ImageUpload>,
    pub is_featured: bool,
    pub status: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
}

pub(super) struct PreparedArticle {
    pub category_id: CategoryId,
    pub title: ArticleTitle,
    pub excerpt: Option<String>,
    pub body: ArticleBody,
    pub thumbnail: String,
    /// `None` when the form left it out. Create applies the defaults, update
    /// keeps the stored value.
    pub status: Option<ArticleStatus>,
    pub is_featured: bool,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
}

impl ArticleCommandService {
    /// Validates and sanitizes the input. The thumbnail is uploaded last so a
    /// rejected form never leaves an orphaned object behind.
    pub(super) async fn prepare(&self, input: ArticleInput) -> ApplicationResult<PreparedArticle> {
        let title = ArticleTitle::new(input.title.trim())?;
        if input.content.trim().is_empty() {
            return Err(ApplicationError::validation("content cannot be empty"));
        }
        let body = ArticleBody::sanitized(self.sanitizer.sanitize(&input.content));
        let category_id = CategoryId::parse(&input.category_id)?;
        let status = non_blank(input.status)
            .map(|raw| raw.parse::<ArticleStatus>())
            .transpose()?;

        let thumbnail = match input.thumbnail_upload {
            Some(upload) => self.uploads.upload_image(upload).await?,
            None => non_blank(input.thumbnail).unwrap_or_default(),
        };

        Ok(PreparedArticle {
            category_id,
            title,
            excerpt: non_blank(input.excerpt),
            body,
            thumbnail,
            status,
            is_featured: input.is_featured,
            meta_title: non_blank(input.meta_title),
            meta_description: non_blank(input.meta_description),
            published_at: input.published_at,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
