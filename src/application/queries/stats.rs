// src/application/queries/stats.rs
use std::sync::Arc;

use chrono::Duration;

use crate::{
    application::{dto::DashboardStatsDto, error::ApplicationResult, ports::time::Clock},
    domain::{
        article::ArticleStatsRepository, category::CategoryRepository, owner::OwnerRepository,
    },
};

pub const TOP_NEWS_WINDOW_DAYS: i64 = 30;
pub const TOP_NEWS_LIMIT: u32 = 5;

pub struct StatsQueryService {
    stats_repo: Arc<dyn ArticleStatsRepository>,
    category_repo: Arc<dyn CategoryRepository>,
    owner_repo: Arc<dyn OwnerRepository>,
    clock: Arc<dyn Clock>,
}

impl StatsQueryService {
    pub fn new(
        stats_repo: Arc<dyn ArticleStatsRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        owner_repo: Arc<dyn OwnerRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            stats_repo,
            category_repo,
            owner_repo,
            clock,
        }
    }

    /// The six reads run concurrently and are not taken from one snapshot.
    pub async fn dashboard(&self) -> ApplicationResult<DashboardStatsDto> {
        let now = self.clock.now();
        let window_start = now - Duration::days(TOP_NEWS_WINDOW_DAYS);

        let (total_news, total_categories, total_users, total_views, category_stats, top_news) = tokio::try_join!(
            self.stats_repo.count_visible(now),
            self.category_repo.count(),
            self.owner_repo.count(),
            self.stats_repo.total_views(),
            self.stats_repo.category_view_stats(),
            self.stats_repo
                .top_viewed_between(window_start, now, TOP_NEWS_LIMIT),
        )?;

        Ok(DashboardStatsDto {
            total_news,
            total_categories,
            total_users,
            total_views,
            category_stats: category_stats
                .into_iter()
                .filter(|stat| stat.views > 0)
                .map(Into::into)
                .collect(),
            top_news: top_news.into_iter().map(Into::into).collect(),
        })
    }
}
