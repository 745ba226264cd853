// tests/support/mocks/newsroom.rs
//! One in-memory store behind every repository trait, so joins and foreign
//! keys behave like the database.
use std::sync::{
    Mutex, MutexGuard,
    atomic::{AtomicBool, Ordering},
};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use newsroom_core::domain::{
    article::{Article, ArticleStatsRepository, ArticleViewStat, CategoryViewStat},
    category::{Category, CategoryId, CategoryRepository, CategorySlug, CategoryUpdate, NewCategory},
    errors::{DomainError, DomainResult},
    owner::Owner,
};
use uuid::Uuid;

#[derive(Default)]
pub struct State {
    pub articles: Vec<Article>,
    pub categories: Vec<Category>,
    pub owners: Vec<Owner>,
}

#[derive(Default)]
pub struct InMemoryNewsroom {
    state: Mutex<State>,
    fail_view_increments: AtomicBool,
}

impl InMemoryNewsroom {
    pub fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap()
    }

    pub fn seed_article(&self, article: Article) {
        self.state().articles.push(article);
    }

    pub fn seed_category(&self, category: Category) {
        self.state().categories.push(category);
    }

    pub fn seed_owner(&self, owner: Owner) {
        self.state().owners.push(owner);
    }

    /// Makes every later `increment_views` call fail with a persistence error.
    pub fn fail_view_increments(&self) {
        self.fail_view_increments.store(true, Ordering::SeqCst);
    }

    pub fn view_increments_fail(&self) -> bool {
        self.fail_view_increments.load(Ordering::SeqCst)
    }

    pub fn articles(&self) -> Vec<Article> {
        self.state().articles.clone()
    }

    pub fn featured_titles(&self) -> Vec<String> {
        self.state()
            .articles
            .iter()
            .filter(|a| a.is_featured)
            .map(|a| a.title.as_str().to_string())
            .collect()
    }
}

impl State {
    /// Fills the joined labels the way the SQL joins do.
    pub fn label(&self, mut article: Article) -> Article {
        article.author_name = self
            .owners
            .iter()
            .find(|o| o.id == article.author_id)
            .map(|o| o.name.as_str().to_string());
        let category = self.categories.iter().find(|c| c.id == article.category_id);
        article.category_name = category.map(|c| c.name.as_str().to_string());
        article.category_slug = category.map(|c| c.slug.as_str().to_string());
        article
    }
}

#[async_trait]
impl CategoryRepository for InMemoryNewsroom {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category> {
        let mut state = self.state();
        if state.categories.iter().any(|c| c.slug == category.slug) {
            return Err(DomainError::Conflict("category slug already exists".into()));
        }
        let created = Category {
            id: CategoryId::new(Uuid::new_v4())?,
            name: category.name,
            name_bn: category.name_bn,
            slug: category.slug,
            description: category.description,
            created_at: category.created_at,
        };
        state.categories.push(created.clone());
        Ok(created)
    }

    async fn update(&self, update: CategoryUpdate) -> DomainResult<Category> {
        let mut state = self.state();
        if state
            .categories
            .iter()
            .any(|c| c.slug == update.slug && c.id != update.id)
        {
            return Err(DomainError::Conflict("category slug already exists".into()));
        }
        let category = state
            .categories
            .iter_mut()
            .find(|c| c.id == update.id)
            .ok_or_else(|| DomainError::not_found("category not found"))?;
        category.name = update.name;
        category.name_bn = update.name_bn;
        category.slug = update.slug;
        category.description = update.description;
        Ok(category.clone())
    }

    async fn delete(&self, id: CategoryId) -> DomainResult<()> {
        let mut state = self.state();
        if state.articles.iter().any(|a| a.category_id == id) {
            return Err(DomainError::Conflict("category still has articles".into()));
        }
        let before = state.categories.len();
        state.categories.retain(|c| c.id != id);
        if state.categories.len() == before {
            return Err(DomainError::not_found("category not found"));
        }
        Ok(())
    }

    async fn list(&self) -> DomainResult<Vec<Category>> {
        let mut categories = self.state().categories.clone();
        categories.sort_by(|a, b| a.name.as_str().cmp(b.name.as_str()));
        Ok(categories)
    }

    async fn find_by_slug(&self, slug: &CategorySlug) -> DomainResult<Option<Category>> {
        Ok(self
            .state()
            .categories
            .iter()
            .find(|c| &c.slug == slug)
            .cloned())
    }

    async fn count(&self) -> DomainResult<u64> {
        Ok(self.state().categories.len() as u64)
    }
}

#[async_trait]
impl ArticleStatsRepository for InMemoryNewsroom {
    async fn count_visible(&self, now: DateTime<Utc>) -> DomainResult<u64> {
        Ok(self
            .state()
            .articles
            .iter()
            .filter(|a| a.is_visible_at(now))
            .count() as u64)
    }

    async fn total_views(&self) -> DomainResult<i64> {
        Ok(self.state().articles.iter().map(|a| a.views_count).sum())
    }

    async fn category_view_stats(&self) -> DomainResult<Vec<CategoryViewStat>> {
        let state = self.state();
        let mut stats: Vec<CategoryViewStat> = state
            .categories
            .iter()
            .map(|c| CategoryViewStat {
                name: c.name.as_str().to_string(),
                views: state
                    .articles
                    .iter()
                    .filter(|a| a.category_id == c.id)
                    .map(|a| a.views_count)
                    .sum(),
            })
            .filter(|stat| stat.views > 0)
            .collect();
        stats.sort_by(|a, b| b.views.cmp(&a.views));
        Ok(stats)
    }

    async fn top_viewed_between(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
        limit: u32,
    ) -> DomainResult<Vec<ArticleViewStat>> {
        let mut articles: Vec<Article> = self
            .state()
            .articles
            .iter()
            .filter(|a| a.is_visible_at(to) && a.published_at >= from)
            .cloned()
            .collect();
        articles.sort_by(|a, b| b.views_count.cmp(&a.views_count));
        Ok(articles
            .into_iter()
            .take(limit as usize)
            .map(|a| ArticleViewStat {
                id: a.id,
                title: a.title.into_inner(),
                views: a.views_count,
            })
            .collect())
    }
}
