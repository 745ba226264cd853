pub mod articles;
pub mod auth;
pub mod categories;
pub mod owners;
pub mod stats;

pub use articles::{ArticleDto, ArticlePage, HomepageDto, SlugCheckDto};
pub use auth::{AuthenticatedOwner, IssuedToken, LoginResponseDto, TokenSubject};
pub use categories::CategoryDto;
pub use owners::OwnerDto;
pub use stats::{CategoryStatDto, DashboardStatsDto, TopArticleDto};
