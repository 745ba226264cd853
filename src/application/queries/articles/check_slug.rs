use super::ArticleQueryService;
use crate::{
    application::{
        dto::SlugCheckDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleSlug,
};

pub struct CheckSlugQuery {
    pub slug: String,
}

impl ArticleQueryService {
    pub async fn check_slug(&self, query: CheckSlugQuery) -> ApplicationResult<SlugCheckDto> {
        if query.slug.trim().is_empty() {
            return Err(ApplicationError::validation("slug is required"));
        }
        let slug = ArticleSlug::new(query.slug)?;
        let exists = self.read_repo.slug_exists(&slug).await?;
        Ok(SlugCheckDto { exists })
    }
}
