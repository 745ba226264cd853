// tests/support/builders.rs
use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use newsroom_core::domain::article::*;
use newsroom_core::domain::category::{Category, CategoryId, CategoryName, CategorySlug};
use newsroom_core::domain::owner::{Email, Owner, OwnerId, OwnerName, PasswordHash, Role};

use super::mocks::{TEST_OWNER_ID, fixed_now};

pub struct ArticleBuilder {
    title: String,
    slug: Option<String>,
    category_id: CategoryId,
    author_id: OwnerId,
    status: ArticleStatus,
    is_featured: bool,
    views: i64,
    published_at: DateTime<Utc>,
}

impl ArticleBuilder {
    pub fn new(category_id: CategoryId) -> Self {
        Self {
            title: "Test Article".into(),
            slug: None,
            category_id,
            author_id: OwnerId::new(TEST_OWNER_ID).unwrap(),
            status: ArticleStatus::Published,
            is_featured: false,
            views: 0,
            published_at: fixed_now() - Duration::hours(1),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn draft(mut self) -> Self {
        self.status = ArticleStatus::Draft;
        self
    }

    pub fn featured(mut self) -> Self {
        self.is_featured = true;
        self
    }

    pub fn views(mut self, views: i64) -> Self {
        self.views = views;
        self
    }

    /// Offset from the fixed test clock; positive values are in the future.
    pub fn published_in(mut self, offset: Duration) -> Self {
        self.published_at = fixed_now() + offset;
        self
    }

    pub fn build(self) -> Article {
        let id = Uuid::new_v4();
        let slug = self.slug.unwrap_or_else(|| format!("article-{}", id.simple()));
        Article {
            id: ArticleId::new(id).unwrap(),
            author_id: self.author_id,
            category_id: self.category_id,
            title: ArticleTitle::new(self.title).unwrap(),
            excerpt: None,
            body: ArticleBody::new("<p>body</p>").unwrap(),
            thumbnail: String::new(),
            slug: ArticleSlug::new(slug).unwrap(),
            status: self.status,
            is_featured: self.is_featured,
            meta_title: None,
            meta_description: None,
            views_count: self.views,
            published_at: self.published_at,
            created_at: self.published_at,
            updated_at: self.published_at,
            author_name: None,
            category_name: None,
            category_slug: None,
        }
    }
}

pub fn category(name: &str, slug: &str) -> Category {
    Category {
        id: CategoryId::new(Uuid::new_v4()).unwrap(),
        name: CategoryName::new(name).unwrap(),
        name_bn: None,
        slug: CategorySlug::new(slug),
        description: None,
        created_at: fixed_now(),
    }
}

/// The owner [`super::mocks::DummyTokenManager`] authenticates as, with password `password123`.
pub fn test_owner() -> Owner {
    Owner {
        id: OwnerId::new(TEST_OWNER_ID).unwrap(),
        name: OwnerName::new("Test Editor").unwrap(),
        email: Email::new("editor@example.com").unwrap(),
        password_hash: PasswordHash::new("hashed:password123").unwrap(),
        role: Role::Editor,
        created_at: fixed_now(),
        updated_at: fixed_now(),
    }
}
