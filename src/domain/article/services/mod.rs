// src/domain/article/services/mod.rs
use std::sync::Arc;

use crate::application::ports::time::Clock;
use crate::application::ports::util::SlugGenerator;
use crate::domain::article::value_objects::{ArticleSlug, ArticleTitle};
use crate::domain::errors::DomainResult;

/// Produces article slugs of the form `<raw-slug>-<unix seconds>`.
///
/// Uniqueness comes from the timestamp suffix; two articles with the same
/// title created in the same second collide and the insert is rejected by storage.
pub struct ArticleSlugService {
    generator: Arc<dyn SlugGenerator>,
    clock: Arc<dyn Clock>,
}

impl ArticleSlugService {
    pub fn new(generator: Arc<dyn SlugGenerator>, clock: Arc<dyn Clock>) -> Self {
        Self { generator, clock }
    }

    pub fn generate_unique_slug(&self, title: &ArticleTitle) -> DomainResult<ArticleSlug> {
        let base = self.generator.slugify(title.as_str());
        let stamp = self.clock.now().timestamp();
        let slug = if base.is_empty() {
            stamp.to_string()
        } else {
            format!("{base}-{stamp}")
        };
        ArticleSlug::new(slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::util::DefaultSlugGenerator;
    use chrono::{DateTime, TimeZone, Utc};

    struct FixedClock(DateTime<Utc>);

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    fn service() -> ArticleSlugService {
        let clock = FixedClock(Utc.timestamp_opt(1_700_000_000, 0).unwrap());
        ArticleSlugService::new(Arc::new(DefaultSlugGenerator), Arc::new(clock))
    }

    #[test]
    fn appends_unix_seconds_to_raw_slug() {
        let title = ArticleTitle::new("Hello World!").unwrap();
        let slug = service().generate_unique_slug(&title).unwrap();
        assert_eq!(slug.as_str(), "hello-world-1700000000");
    }

    #[test]
    fn punctuation_only_title_yields_bare_timestamp() {
        let title = ArticleTitle::new("!!!").unwrap();
        let slug = service().generate_unique_slug(&title).unwrap();
        assert_eq!(slug.as_str(), "1700000000");
    }
}
