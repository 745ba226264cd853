use super::ArticleQueryService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleSlug,
};

pub struct GetArticleBySlugQuery {
    pub slug: String,
}

impl ArticleQueryService {
    /// Returns the article and records a view in the background. The view
    /// counter is best effort; its failures are logged and never reach the reader.
    pub async fn get_article_by_slug(
        &self,
        query: GetArticleBySlugQuery,
    ) -> ApplicationResult<ArticleDto> {
        let slug = ArticleSlug::new(query.slug)?;
        let article = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let write_repo = self.write_repo.clone();
        let id = article.id;
        tokio::spawn(async move {
            if let Err(err) = write_repo.increment_views(id).await {
                tracing::warn!(article_id = %id, error = %err, "failed to increment view count");
            }
        });

        Ok(article.into())
    }
}
