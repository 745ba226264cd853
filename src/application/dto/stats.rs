use crate::domain::article::{ArticleViewStat, CategoryViewStat};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryStatDto {
    pub name: String,
    pub value: i64,
}

impl From<CategoryViewStat> for CategoryStatDto {
    fn from(stat: CategoryViewStat) -> Self {
        Self {
            name: stat.name,
            value: stat.views,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TopArticleDto {
    pub id: Uuid,
    pub title: String,
    pub views: i64,
}

impl From<ArticleViewStat> for TopArticleDto {
    fn from(stat: ArticleViewStat) -> Self {
        Self {
            id: stat.id.into(),
            title: stat.title,
            views: stat.views,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DashboardStatsDto {
    pub total_news: u64,
    pub total_categories: u64,
    pub total_users: u64,
    pub total_views: i64,
    pub category_stats: Vec<CategoryStatDto>,
    pub top_news: Vec<TopArticleDto>,
}
