// src/domain/article/stats.rs
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryViewStat {
    pub name: String,
    pub views: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleViewStat {
    pub id: ArticleId,
    pub title: String,
    pub views: i64,
}

#[async_trait]
pub trait ArticleStatsRepository: Send + Sync {
    async fn count_visible(&self, now: DateTime<Utc>) -> DomainResult<u64>;
    /// Sum of views over every article, drafts included.
    async fn total_views(&self) -> DomainResult<i64>;
    /// Categories with a positive view total, highest first.
    async fn category_view_stats(&self) -> DomainResult<Vec<CategoryViewStat>>;
    async fn top_viewed_between(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
        limit: u32,
    ) -> DomainResult<Vec<ArticleViewStat>>;
}
