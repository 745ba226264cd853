// tests/support/mocks/article_repos.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use newsroom_core::domain::{
    article::{
        Article, ArticleFilter, ArticleId, ArticleReadRepository, ArticleSlug, ArticleSort,
        ArticleUpdate, ArticleWriteRepository, NewArticle, PageRequest,
    },
    errors::{DomainError, DomainResult},
};
use uuid::Uuid;

use super::newsroom::{InMemoryNewsroom, State};

fn demote_featured(state: &mut State, keep: Option<ArticleId>) {
    for article in &mut state.articles {
        if Some(article.id) != keep {
            article.is_featured = false;
        }
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryNewsroom {
    async fn insert(&self, new: NewArticle) -> DomainResult<Article> {
        let mut state = self.state();
        if state.articles.iter().any(|a| a.slug == new.slug) {
            return Err(DomainError::Conflict("slug already exists".into()));
        }
        if !state.categories.iter().any(|c| c.id == new.category_id) {
            return Err(DomainError::not_found("category not found"));
        }
        if new.is_featured {
            demote_featured(&mut state, None);
        }

        let article = Article {
            id: ArticleId::new(Uuid::new_v4())?,
            author_id: new.author_id,
            category_id: new.category_id,
            title: new.title,
            excerpt: new.excerpt,
            body: new.body,
            thumbnail: new.thumbnail,
            slug: new.slug,
            status: new.status,
            is_featured: new.is_featured,
            meta_title: new.meta_title,
            meta_description: new.meta_description,
            views_count: 0,
            published_at: new.published_at,
            created_at: new.created_at,
            updated_at: new.created_at,
            author_name: None,
            category_name: None,
            category_slug: None,
        };
        state.articles.push(article.clone());
        Ok(state.label(article))
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let mut state = self.state();
        if !state.categories.iter().any(|c| c.id == update.category_id) {
            return Err(DomainError::not_found("category not found"));
        }
        if !state.articles.iter().any(|a| a.id == update.id) {
            return Err(DomainError::not_found("article not found"));
        }
        if update.is_featured {
            demote_featured(&mut state, Some(update.id));
        }
        let article = state
            .articles
            .iter_mut()
            .find(|a| a.id == update.id)
            .ok_or_else(|| DomainError::not_found("article not found"))?;
        update.apply_to(article);
        let article = article.clone();
        Ok(state.label(article))
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let mut state = self.state();
        let before = state.articles.len();
        state.articles.retain(|a| a.id != id);
        if state.articles.len() == before {
            return Err(DomainError::not_found("article not found"));
        }
        Ok(())
    }

    async fn increment_views(&self, id: ArticleId) -> DomainResult<()> {
        if self.view_increments_fail() {
            return Err(DomainError::Persistence("connection reset".into()));
        }
        if let Some(article) = self.state().articles.iter_mut().find(|a| a.id == id) {
            article.views_count += 1;
        }
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryNewsroom {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let state = self.state();
        let found = state.articles.iter().find(|a| a.id == id).cloned();
        Ok(found.map(|a| state.label(a)))
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        let state = self.state();
        let found = state.articles.iter().find(|a| &a.slug == slug).cloned();
        Ok(found.map(|a| state.label(a)))
    }

    async fn slug_exists(&self, slug: &ArticleSlug) -> DomainResult<bool> {
        Ok(self.state().articles.iter().any(|a| &a.slug == slug))
    }

    async fn list_page(
        &self,
        filter: &ArticleFilter,
        sort: ArticleSort,
        page: PageRequest,
    ) -> DomainResult<Vec<Article>> {
        let state = self.state();
        let mut matching: Vec<Article> = state
            .articles
            .iter()
            .filter(|a| filter.matches(a))
            .cloned()
            .collect();
        matching.sort_by(|a, b| sort.compare(a, b));
        Ok(matching
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit as usize)
            .map(|a| state.label(a))
            .collect())
    }

    async fn count(&self, filter: &ArticleFilter) -> DomainResult<u64> {
        Ok(self
            .state()
            .articles
            .iter()
            .filter(|a| filter.matches(a))
            .count() as u64)
    }

    async fn find_featured(&self, now: DateTime<Utc>) -> DomainResult<Option<Article>> {
        let state = self.state();
        let featured = state
            .articles
            .iter()
            .filter(|a| a.is_featured && a.is_visible_at(now))
            .max_by_key(|a| a.published_at)
            .cloned();
        Ok(featured.map(|a| state.label(a)))
    }
}
