// src/infrastructure/repositories/postgres_article.rs
use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleBody, ArticleFilter, ArticleId, ArticleReadRepository, ArticleSlug,
    ArticleSort, ArticleStatus, ArticleTitle, ArticleUpdate, ArticleWriteRepository, NewArticle,
    PageRequest,
};
use crate::domain::category::CategoryId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::owner::OwnerId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder, Transaction};
use uuid::Uuid;

const NEWS_COLUMNS: &str = "n.id, n.author_id, n.category_id, n.title, n.excerpt, n.content, \
     n.thumbnail, n.slug, n.status, n.is_featured, n.meta_title, n.meta_description, \
     n.views_count, n.published_at, n.created_at, n.updated_at, \
     o.name AS author_name, c.name AS category_name, c.slug AS category_slug";

const NEWS_JOINS: &str = " LEFT JOIN owners o ON o.id = n.author_id \
     LEFT JOIN categories c ON c.id = n.category_id";

#[derive(Clone)]
pub struct PostgresArticleWriteRepository {
    pool: PgPool,
}

impl PostgresArticleWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: Uuid,
    author_id: Uuid,
    category_id: Uuid,
    title: String,
    excerpt: Option<String>,
    content: String,
    thumbnail: String,
    slug: String,
    status: String,
    is_featured: bool,
    meta_title: Option<String>,
    meta_description: Option<String>,
    views_count: i64,
    published_at: DateTime<Utc>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    author_name: Option<String>,
    category_name: Option<String>,
    category_slug: Option<String>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(row.id)?,
            author_id: OwnerId::new(row.author_id)?,
            category_id: CategoryId::new(row.category_id)?,
            title: ArticleTitle::new(row.title)?,
            excerpt: row.excerpt,
            body: ArticleBody::sanitized(row.content),
            thumbnail: row.thumbnail,
            slug: ArticleSlug::new(row.slug)?,
            status: row.status.parse::<ArticleStatus>()?,
            is_featured: row.is_featured,
            meta_title: row.meta_title,
            meta_description: row.meta_description,
            views_count: row.views_count,
            published_at: row.published_at,
            created_at: row.created_at,
            updated_at: row.updated_at,
            author_name: row.author_name,
            category_name: row.category_name,
            category_slug: row.category_slug,
        })
    }
}

async fn fetch_joined(
    tx: &mut Transaction<'_, Postgres>,
    id: Uuid,
) -> DomainResult<Article> {
    let sql = format!("SELECT {NEWS_COLUMNS} FROM news n{NEWS_JOINS} WHERE n.id = $1");
    let row = sqlx::query_as::<_, ArticleRow>(&sql)
        .bind(id)
        .fetch_one(&mut **tx)
        .await
        .map_err(map_sqlx)?;
    Article::try_from(row)
}

/// Clears the featured flag on every article except `keep`.
async fn demote_featured(
    tx: &mut Transaction<'_, Postgres>,
    keep: Option<Uuid>,
) -> DomainResult<()> {
    sqlx::query(
        "UPDATE news SET is_featured = FALSE
         WHERE is_featured AND ($1::uuid IS NULL OR id <> $1)",
    )
    .bind(keep)
    .execute(&mut **tx)
    .await
    .map_err(map_sqlx)?;
    Ok(())
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            author_id,
            category_id,
            title,
            excerpt,
            body,
            thumbnail,
            slug,
            status,
            is_featured,
            meta_title,
            meta_description,
            published_at,
            created_at,
        } = article;

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;
        if is_featured {
            demote_featured(&mut tx, None).await?;
        }

        let id: Uuid = sqlx::query_scalar(
            "INSERT INTO news (author_id, category_id, title, excerpt, content, thumbnail, slug,
                               status, is_featured, meta_title, meta_description, published_at,
                               created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $13)
             RETURNING id",
        )
        .bind(author_id.as_uuid())
        .bind(category_id.as_uuid())
        .bind(title.as_str())
        .bind(excerpt)
        .bind(body.as_str())
        .bind(thumbnail)
        .bind(slug.as_str())
        .bind(status.as_str())
        .bind(is_featured)
        .bind(meta_title)
        .bind(meta_description)
        .bind(published_at)
        .bind(created_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        let created = fetch_joined(&mut tx, id).await?;
        tx.commit().await.map_err(map_sqlx)?;
        Ok(created)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let ArticleUpdate {
            id,
            category_id,
            title,
            excerpt,
            body,
            thumbnail,
            status,
            is_featured,
            meta_title,
            meta_description,
            published_at,
            updated_at,
        } = update;

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;
        if is_featured {
            demote_featured(&mut tx, Some(id.as_uuid())).await?;
        }

        let result = sqlx::query(
            "UPDATE news SET category_id = $2, title = $3, excerpt = $4, content = $5,
                             thumbnail = $6, status = COALESCE($7, status), is_featured = $8,
                             meta_title = $9, meta_description = $10,
                             published_at = COALESCE($11, published_at), updated_at = $12
             WHERE id = $1",
        )
        .bind(id.as_uuid())
        .bind(category_id.as_uuid())
        .bind(title.as_str())
        .bind(excerpt)
        .bind(body.as_str())
        .bind(thumbnail)
        .bind(status.map(|s| s.as_str()))
        .bind(is_featured)
        .bind(meta_title)
        .bind(meta_description)
        .bind(published_at)
        .bind(updated_at)
        .execute(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("article not found".into()));
        }

        let updated = fetch_joined(&mut tx, id.as_uuid()).await?;
        tx.commit().await.map_err(map_sqlx)?;
        Ok(updated)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM news WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }

    async fn increment_views(&self, id: ArticleId) -> DomainResult<()> {
        sqlx::query("UPDATE news SET views_count = views_count + 1 WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(())
    }
}

impl PostgresArticleReadRepository {
    fn apply_filter(builder: &mut QueryBuilder<'_, Postgres>, filter: &ArticleFilter) {
        builder.push(" WHERE n.status = 'published' AND n.published_at <= ");
        builder.push_bind(filter.published_before);

        if let Some(category_id) = filter.category_id {
            builder.push(" AND n.category_id = ");
            builder.push_bind(category_id.as_uuid());
        }
        if let Some(author_id) = filter.author_id {
            builder.push(" AND n.author_id = ");
            builder.push_bind(author_id.as_uuid());
        }
        if let Some(is_featured) = filter.is_featured {
            builder.push(" AND n.is_featured = ");
            builder.push_bind(is_featured);
        }
        if let Some(term) = filter.search.as_deref() {
            builder.push(" AND n.title ILIKE ");
            builder.push_bind(format!("%{}%", escape_like(term)));
        }
    }

    fn apply_ordering(builder: &mut QueryBuilder<'_, Postgres>, sort: ArticleSort) {
        builder.push(match sort {
            ArticleSort::Latest => " ORDER BY n.published_at DESC, n.id DESC",
            ArticleSort::Oldest => " ORDER BY n.published_at ASC, n.id ASC",
            ArticleSort::ViewsDesc => " ORDER BY n.views_count DESC, n.published_at DESC",
            ArticleSort::ViewsAsc => " ORDER BY n.views_count ASC, n.published_at DESC",
        });
    }
}

fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let sql = format!("SELECT {NEWS_COLUMNS} FROM news n{NEWS_JOINS} WHERE n.id = $1");
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        let sql = format!("SELECT {NEWS_COLUMNS} FROM news n{NEWS_JOINS} WHERE n.slug = $1");
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(slug.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn slug_exists(&self, slug: &ArticleSlug) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM news WHERE slug = $1)")
            .bind(slug.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)
    }

    async fn list_page(
        &self,
        filter: &ArticleFilter,
        sort: ArticleSort,
        page: PageRequest,
    ) -> DomainResult<Vec<Article>> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {NEWS_COLUMNS} FROM news n{NEWS_JOINS}"));
        Self::apply_filter(&mut builder, filter);
        Self::apply_ordering(&mut builder, sort);
        builder.push(" LIMIT ");
        builder.push_bind(i64::from(page.limit));
        builder.push(" OFFSET ");
        builder.push_bind(i64::try_from(page.offset()).unwrap_or(i64::MAX));

        let rows = builder
            .build_query_as::<ArticleRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Article::try_from).collect()
    }

    async fn count(&self, filter: &ArticleFilter) -> DomainResult<u64> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("SELECT COUNT(*) FROM news n");
        Self::apply_filter(&mut builder, filter);

        let total: i64 = builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(u64::try_from(total).unwrap_or_default())
    }

    async fn find_featured(&self, now: DateTime<Utc>) -> DomainResult<Option<Article>> {
        let sql = format!(
            "SELECT {NEWS_COLUMNS} FROM news n{NEWS_JOINS}
             WHERE n.is_featured AND n.status = 'published' AND n.published_at <= $1
             ORDER BY n.published_at DESC LIMIT 1"
        );
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(now)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::escape_like;

    #[test]
    fn like_wildcards_are_escaped() {
        assert_eq!(escape_like("100%"), "100\\%");
        assert_eq!(escape_like("a_b"), "a\\_b");
        assert_eq!(escape_like("elect"), "elect");
    }
}
