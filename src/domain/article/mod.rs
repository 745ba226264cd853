pub mod entity;
pub mod query;
pub mod repository;
pub mod services;
pub mod stats;
pub mod value_objects;

pub use entity::{Article, ArticleUpdate, NewArticle};
pub use query::{ArticleFilter, ArticleSort, PageRequest};
pub use repository::{ArticleReadRepository, ArticleWriteRepository};
pub use stats::{ArticleStatsRepository, ArticleViewStat, CategoryViewStat};
pub use value_objects::{ArticleBody, ArticleId, ArticleSlug, ArticleStatus, ArticleTitle};
