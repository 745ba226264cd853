// src/application/commands/articles/create.rs
use super::{ArticleCommandService, ArticleInput};
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedOwner},
        error::ApplicationResult,
    },
    domain::article::NewArticle,
};

pub struct CreateArticleCommand {
    pub input: ArticleInput,
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        actor: &AuthenticatedOwner,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let prepared = self.prepare(command.input).await?;
        let slug = self.slug_service.generate_unique_slug(&prepared.title)?;

        let new_article = NewArticle {
            author_id: actor.id,
            category_id: prepared.category_id,
            title: prepared.title,
            excerpt: prepared.excerpt,
            body: prepared.body,
            thumbnail: prepared.thumbnail,
            slug,
            status: prepared.status.unwrap_or_default(),
            is_featured: prepared.is_featured,
            meta_title: prepared.meta_title,
            meta_description: prepared.meta_description,
            published_at: prepared.published_at.unwrap_or_else(|| self.clock.now()),
            created_at: self.clock.now(),
        };

        let created = self.write_repo.insert(new_article).await?;
        tracing::info!(article_id = %created.id, slug = %created.slug, "article created");
        Ok(created.into())
    }
}
