// src/application/queries/articles/mod.rs
mod check_slug;
mod get_by_slug;
mod homepage;
mod list;
mod service;

pub use check_slug::CheckSlugQuery;
pub use get_by_slug::GetArticleBySlugQuery;
pub use homepage::{HOMEPAGE_LATEST_LIMIT, HOMEPAGE_POPULAR_LIMIT};
pub use list::ListArticlesQuery;
pub use service::ArticleQueryService;
