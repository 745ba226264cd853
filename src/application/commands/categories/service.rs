// src/application/commands/categories/service.rs
use std::sync::Arc;

use crate::{
    application::ports::{time::Clock, util::SlugGenerator},
    domain::category::{CategoryName, CategoryRepository, CategorySlug},
};

pub struct CategoryCommandService {
    pub(super) repo: Arc<dyn CategoryRepository>,
    pub(super) slugger: Arc<dyn SlugGenerator>,
    pub(super) clock: Arc<dyn Clock>,
}

impl CategoryCommandService {
    pub fn new(
        repo: Arc<dyn CategoryRepository>,
        slugger: Arc<dyn SlugGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repo,
            slugger,
            clock,
        }
    }

    /// Category slugs carry no suffix, so "Tech" and "Tech!" derive the same
    /// slug and the second write is rejected by storage as a conflict.
    pub(super) fn derive_slug(&self, name: &CategoryName) -> CategorySlug {
        CategorySlug::new(self.slugger.slugify(name.as_str()))
    }
}

pub(super) fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
