// src/application/commands/articles/update.rs
use super::{ArticleCommandService, ArticleInput};
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::article::{ArticleId, ArticleUpdate},
};

pub struct UpdateArticleCommand {
    pub id: String,
    pub input: ArticleInput,
}

impl ArticleCommandService {
    /// Replaces the editable fields. The slug assigned at creation is kept, and
    /// status and publication time only change when the form sends them.
    pub async fn update_article(&self, command: UpdateArticleCommand) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::parse(&command.id)?;
        let prepared = self.prepare(command.input).await?;

        let update = ArticleUpdate {
            id,
            category_id: prepared.category_id,
            title: prepared.title,
            excerpt: prepared.excerpt,
            body: prepared.body,
            thumbnail: prepared.thumbnail,
            status: prepared.status,
            is_featured: prepared.is_featured,
            meta_title: prepared.meta_title,
            meta_description: prepared.meta_description,
            published_at: prepared.published_at,
            updated_at: self.clock.now(),
        };

        let updated = self.write_repo.update(update).await?;
        tracing::info!(article_id = %updated.id, "article updated");
        Ok(updated.into())
    }
}
