// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_article;
mod postgres_article_stats;
mod postgres_category;
mod postgres_owner;

pub use error::map_sqlx;
pub use postgres_article::{PostgresArticleReadRepository, PostgresArticleWriteRepository};
pub use postgres_article_stats::PostgresArticleStatsRepository;
pub use postgres_category::PostgresCategoryRepository;
pub use postgres_owner::PostgresOwnerRepository;
