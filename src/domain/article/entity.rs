// src/domain/article/entity.rs
use crate::domain::article::value_objects::{
    ArticleBody, ArticleId, ArticleSlug, ArticleStatus, ArticleTitle,
};
use crate::domain::category::CategoryId;
use crate::domain::owner::OwnerId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub author_id: OwnerId,
    pub category_id: CategoryId,
    pub title: ArticleTitle,
    pub excerpt: Option<String>,
    pub body: ArticleBody,
    pub thumbnail: String,
    pub slug: ArticleSlug,
    pub status: ArticleStatus,
    pub is_featured: bool,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub views_count: i64,
    pub published_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub author_name: Option<String>,
    pub category_name: Option<String>,
    pub category_slug: Option<String>,
}

impl Article {
    /// Whether the public site may show this article at `now`.
    pub fn is_visible_at(&self, now: DateTime<Utc>) -> bool {
        self.status == ArticleStatus::Published && self.published_at <= now
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub author_id: OwnerId,
    pub category_id: CategoryId,
    pub title: ArticleTitle,
    pub excerpt: Option<String>,
    pub body: ArticleBody,
    pub thumbnail: String,
    pub slug: ArticleSlug,
    pub status: ArticleStatus,
    pub is_featured: bool,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub published_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Replacement of the editable fields. The slug and author are not part of it;
/// `status` and `published_at` are left untouched when `None`.
#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub category_id: CategoryId,
    pub title: ArticleTitle,
    pub excerpt: Option<String>,
    pub body: ArticleBody,
    pub thumbnail: String,
    pub status: Option<ArticleStatus>,
    pub is_featured: bool,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub updated_at: DateTime<Utc>,
}

impl ArticleUpdate {
    /// In-process form of the repository `update` contract. Storage
    /// implementations must leave the same fields untouched.
    pub fn apply_to(&self, article: &mut Article) {
        article.category_id = self.category_id;
        article.title = self.title.clone();
        article.excerpt = self.excerpt.clone();
        article.body = self.body.clone();
        article.thumbnail = self.thumbnail.clone();
        if let Some(status) = self.status {
            article.status = status;
        }
        article.is_featured = self.is_featured;
        article.meta_title = self.meta_title.clone();
        article.meta_description = self.meta_description.clone();
        if let Some(published_at) = self.published_at {
            article.published_at = published_at;
        }
        article.updated_at = self.updated_at;
    }
}
