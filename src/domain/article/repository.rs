use crate::domain::article::entity::{Article, ArticleUpdate, NewArticle};
use crate::domain::article::query::{ArticleFilter, ArticleSort, PageRequest};
use crate::domain::article::value_objects::{ArticleId, ArticleSlug};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Writes that set `is_featured` must clear the flag on every other article
/// within the same unit of work.
#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article>;
    async fn delete(&self, id: ArticleId) -> DomainResult<()>;
    async fn increment_views(&self, id: ArticleId) -> DomainResult<()>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>>;
    async fn slug_exists(&self, slug: &ArticleSlug) -> DomainResult<bool>;
    async fn list_page(
        &self,
        filter: &ArticleFilter,
        sort: ArticleSort,
        page: PageRequest,
    ) -> DomainResult<Vec<Article>>;
    async fn count(&self, filter: &ArticleFilter) -> DomainResult<u64>;
    /// Newest visible article carrying the featured flag.
    async fn find_featured(&self, now: DateTime<Utc>) -> DomainResult<Option<Article>>;
}
