use super::ArticleQueryService;
use crate::{
    application::{dto::ArticlePage, error::ApplicationResult},
    domain::{
        article::{ArticleFilter, ArticleSort, PageRequest},
        category::CategorySlug,
        owner::OwnerId,
    },
};

#[derive(Debug, Clone, Default)]
pub struct ListArticlesQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub category: Option<String>,
    pub author_id: Option<String>,
    pub sort: Option<String>,
    pub featured: Option<bool>,
    pub search: Option<String>,
}

impl ArticleQueryService {
    /// Public listing. Drafts and articles scheduled in the future never appear.
    pub async fn list_articles(&self, query: ListArticlesQuery) -> ApplicationResult<ArticlePage> {
        let page = PageRequest::new(query.page, query.limit);
        let sort = ArticleSort::from_param(query.sort.as_deref().unwrap_or_default());
        // A malformed author id narrows nothing, matching how the other
        // optional filters treat unusable input.
        let author_id = query
            .author_id
            .as_deref()
            .filter(|raw| !raw.trim().is_empty())
            .and_then(|raw| OwnerId::parse(raw).ok());

        let mut filter = ArticleFilter::published_before(self.clock.now())
            .with_author(author_id)
            .with_featured(query.featured)
            .with_search(query.search.as_deref());

        if let Some(raw) = query.category.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            match self.category_repo.find_by_slug(&CategorySlug::new(raw)).await? {
                Some(category) => filter = filter.with_category(Some(category.id)),
                None => {
                    tracing::debug!(category = raw, "unknown category filter");
                    return Ok(ArticlePage::empty());
                }
            }
        }

        let (articles, total) = tokio::try_join!(
            self.read_repo.list_page(&filter, sort, page),
            self.read_repo.count(&filter),
        )?;

        Ok(ArticlePage {
            news_list: articles.into_iter().map(Into::into).collect(),
            total,
        })
    }
}
