// src/infrastructure/repositories/postgres_article_stats.rs
use super::map_sqlx;
use crate::domain::article::{ArticleId, ArticleStatsRepository, ArticleViewStat, CategoryViewStat};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

#[derive(Clone)]
pub struct PostgresArticleStatsRepository {
    pool: PgPool,
}

impl PostgresArticleStatsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CategoryViewRow {
    name: String,
    views: i64,
}

#[derive(Debug, FromRow)]
struct TopArticleRow {
    id: Uuid,
    title: String,
    views: i64,
}

#[async_trait]
impl ArticleStatsRepository for PostgresArticleStatsRepository {
    async fn count_visible(&self, now: DateTime<Utc>) -> DomainResult<u64> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(1) FROM news WHERE status = 'published' AND published_at <= $1",
        )
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map(|count| u64::try_from(count).unwrap_or_default())
        .map_err(map_sqlx)
    }

    async fn total_views(&self) -> DomainResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COALESCE(SUM(views_count), 0)::BIGINT FROM news")
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)
    }

    async fn category_view_stats(&self) -> DomainResult<Vec<CategoryViewStat>> {
        let rows = sqlx::query_as::<_, CategoryViewRow>(
            "SELECT c.name, COALESCE(SUM(n.views_count), 0)::BIGINT AS views
             FROM categories c
             LEFT JOIN news n ON n.category_id = c.id
             GROUP BY c.id, c.name
             HAVING COALESCE(SUM(n.views_count), 0) > 0
             ORDER BY views DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(rows
            .into_iter()
            .map(|row| CategoryViewStat {
                name: row.name,
                views: row.views,
            })
            .collect())
    }

    async fn top_viewed_between(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
        limit: u32,
    ) -> DomainResult<Vec<ArticleViewStat>> {
        let rows = sqlx::query_as::<_, TopArticleRow>(
            "SELECT id, title, views_count AS views
             FROM news
             WHERE status = 'published' AND published_at >= $1 AND published_at <= $2
             ORDER BY views_count DESC, published_at DESC
             LIMIT $3",
        )
        .bind(from)
        .bind(to)
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter()
            .map(|row| {
                Ok(ArticleViewStat {
                    id: ArticleId::new(row.id)?,
                    title: row.title,
                    views: row.views,
                })
            })
            .collect()
    }
}
