use crate::domain::article::Article;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub id: Uuid,
    pub author_id: Uuid,
    pub category_id: Uuid,
    pub title: String,
    pub excerpt: Option<String>,
    pub content: String,
    pub thumbnail: String,
    pub slug: String,
    #[schema(example = "published")]
    pub status: String,
    pub is_featured: bool,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub views_count: i64,
    pub published_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_slug: Option<String>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            author_id: article.author_id.into(),
            category_id: article.category_id.into(),
            title: article.title.into_inner(),
            excerpt: article.excerpt,
            content: article.body.into_inner(),
            thumbnail: article.thumbnail,
            slug: article.slug.into_inner(),
            status: article.status.as_str().to_string(),
            is_featured: article.is_featured,
            meta_title: article.meta_title,
            meta_description: article.meta_description,
            views_count: article.views_count,
            published_at: article.published_at,
            created_at: article.created_at,
            updated_at: article.updated_at,
            author_name: article.author_name,
            category_name: article.category_name,
            category_slug: article.category_slug,
        }
    }
}

/// One page of a public listing plus the size of the whole filtered set.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticlePage {
    #[serde(rename = "newsList")]
    pub news_list: Vec<ArticleDto>,
    pub total: u64,
}

impl ArticlePage {
    pub fn empty() -> Self {
        Self {
            news_list: Vec::new(),
            total: 0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HomepageDto {
    pub featured: Option<ArticleDto>,
    pub latest: Vec<ArticleDto>,
    pub popular: Vec<ArticleDto>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct SlugCheckDto {
    pub exists: bool,
}
