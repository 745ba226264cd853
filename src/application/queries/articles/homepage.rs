use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleDto, HomepageDto},
        error::ApplicationResult,
    },
    domain::article::{Article, ArticleFilter, ArticleId, ArticleSort, PageRequest},
};

pub const HOMEPAGE_LATEST_LIMIT: usize = 20;
pub const HOMEPAGE_POPULAR_LIMIT: usize = 5;

impl ArticleQueryService {
    /// Featured article plus latest and popular lists. The featured article
    /// never appears again in either list.
    pub async fn homepage(&self) -> ApplicationResult<HomepageDto> {
        let filter = ArticleFilter::published_before(self.clock.now());
        // one spare row per list covers the featured article being filtered out
        let latest_page = PageRequest::first(fetch_size(HOMEPAGE_LATEST_LIMIT));
        let popular_page = PageRequest::first(fetch_size(HOMEPAGE_POPULAR_LIMIT));

        let (featured, latest, popular) = tokio::try_join!(
            self.read_repo.find_featured(filter.published_before),
            self.read_repo
                .list_page(&filter, ArticleSort::Latest, latest_page),
            self.read_repo
                .list_page(&filter, ArticleSort::ViewsDesc, popular_page),
        )?;

        let featured_id = featured.as_ref().map(|article| article.id);
        Ok(HomepageDto {
            latest: exclude(latest, featured_id, HOMEPAGE_LATEST_LIMIT),
            popular: exclude(popular, featured_id, HOMEPAGE_POPULAR_LIMIT),
            featured: featured.map(Into::into),
        })
    }
}

fn fetch_size(limit: usize) -> u32 {
    u32::try_from(limit + 1).unwrap_or(u32::MAX)
}

fn exclude(articles: Vec<Article>, featured: Option<ArticleId>, limit: usize) -> Vec<ArticleDto> {
    articles
        .into_iter()
        .filter(|article| Some(article.id) != featured)
        .take(limit)
        .map(Into::into)
        .collect()
}
