// src/domain/article/query.rs
use std::cmp::Ordering;

use chrono::{DateTime, Utc};

use crate::domain::article::entity::Article;
use crate::domain::category::CategoryId;
use crate::domain::owner::OwnerId;

pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const MAX_PAGE_SIZE: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArticleSort {
    #[default]
    Latest,
    Oldest,
    ViewsDesc,
    ViewsAsc,
}

impl ArticleSort {
    /// Maps the public `sort` parameter. Unknown values fall back to newest first.
    pub fn from_param(value: &str) -> Self {
        match value.trim() {
            "popular" | "views_desc" => Self::ViewsDesc,
            "views_asc" => Self::ViewsAsc,
            "oldest" => Self::Oldest,
            _ => Self::Latest,
        }
    }

    /// Ordering every `ArticleReadRepository::list_page` must produce. The
    /// Postgres repository expresses the same rules as `ORDER BY` clauses.
    pub fn compare(self, a: &Article, b: &Article) -> Ordering {
        match self {
            Self::Latest => b.published_at.cmp(&a.published_at),
            Self::Oldest => a.published_at.cmp(&b.published_at),
            Self::ViewsDesc => b
                .views_count
                .cmp(&a.views_count)
                .then_with(|| b.published_at.cmp(&a.published_at)),
            Self::ViewsAsc => a
                .views_count
                .cmp(&b.views_count)
                .then_with(|| b.published_at.cmp(&a.published_at)),
        }
    }
}

/// Predicates applied to public listings. Only published articles whose
/// publication time is not after `published_before` ever match.
#[derive(Debug, Clone)]
pub struct ArticleFilter {
    pub published_before: DateTime<Utc>,
    pub category_id: Option<CategoryId>,
    pub author_id: Option<OwnerId>,
    pub is_featured: Option<bool>,
    pub search: Option<String>,
}

impl ArticleFilter {
    pub fn published_before(now: DateTime<Utc>) -> Self {
        Self {
            published_before: now,
            category_id: None,
            author_id: None,
            is_featured: None,
            search: None,
        }
    }

    #[must_use]
    pub fn with_category(mut self, category_id: Option<CategoryId>) -> Self {
        self.category_id = category_id;
        self
    }

    #[must_use]
    pub fn with_author(mut self, author_id: Option<OwnerId>) -> Self {
        self.author_id = author_id;
        self
    }

    #[must_use]
    pub fn with_featured(mut self, is_featured: Option<bool>) -> Self {
        self.is_featured = is_featured;
        self
    }

    /// Blank terms are dropped so they never narrow the listing.
    #[must_use]
    pub fn with_search(mut self, term: Option<&str>) -> Self {
        self.search = term
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(ToOwned::to_owned);
        self
    }

    /// Reference predicate for the filter. Storage implementations translate
    /// it into their own query language and must select exactly these rows.
    pub fn matches(&self, article: &Article) -> bool {
        if !article.is_visible_at(self.published_before) {
            return false;
        }
        if self.category_id.is_some_and(|id| article.category_id != id) {
            return false;
        }
        if self.author_id.is_some_and(|id| article.author_id != id) {
            return false;
        }
        if self.is_featured.is_some_and(|f| article.is_featured != f) {
            return false;
        }
        match &self.search {
            Some(term) => article
                .title
                .as_str()
                .to_lowercase()
                .contains(&term.to_lowercase()),
            None => true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub limit: u32,
}

impl PageRequest {
    pub fn new(page: Option<i64>, limit: Option<i64>) -> Self {
        let page = match page {
            Some(p) if p >= 1 => u32::try_from(p).unwrap_or(u32::MAX),
            _ => 1,
        };
        let limit = match limit {
            Some(l) if l >= 1 => u32::try_from(l.min(i64::from(MAX_PAGE_SIZE))).unwrap_or(MAX_PAGE_SIZE),
            _ => DEFAULT_PAGE_SIZE,
        };
        Self { page, limit }
    }

    pub fn first(limit: u32) -> Self {
        Self { page: 1, limit }
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.limit)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None, None)
    }
}
