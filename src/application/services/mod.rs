// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        ApplicationResult,
        commands::{
            articles::ArticleCommandService, categories::CategoryCommandService,
            owners::OwnerCommandService, provision::ProvisioningService, uploads::UploadService,
        },
        dto::AuthenticatedOwner,
        ports::{
            sanitizer::HtmlSanitizer,
            security::{PasswordHasher, TokenManager},
            storage::ObjectStorage,
            time::Clock,
            util::SlugGenerator,
        },
        queries::{
            articles::ArticleQueryService, categories::CategoryQueryService,
            owners::OwnerQueryService, stats::StatsQueryService,
        },
    },
    domain::{
        article::{
            ArticleReadRepository, ArticleStatsRepository, ArticleWriteRepository,
            services::ArticleSlugService,
        },
        category::CategoryRepository,
        owner::OwnerRepository,
    },
};

/// Storage collaborators the services are built from.
pub struct Repositories {
    pub article_write: Arc<dyn ArticleWriteRepository>,
    pub article_read: Arc<dyn ArticleReadRepository>,
    pub article_stats: Arc<dyn ArticleStatsRepository>,
    pub categories: Arc<dyn CategoryRepository>,
    pub owners: Arc<dyn OwnerRepository>,
}

/// Non-storage collaborators.
pub struct Adapters {
    pub password_hasher: Arc<dyn PasswordHasher>,
    pub token_manager: Arc<dyn TokenManager>,
    pub clock: Arc<dyn Clock>,
    pub slugger: Arc<dyn SlugGenerator>,
    pub sanitizer: Arc<dyn HtmlSanitizer>,
    pub storage: Arc<dyn ObjectStorage>,
}

pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub category_commands: Arc<CategoryCommandService>,
    pub category_queries: Arc<CategoryQueryService>,
    pub owner_commands: Arc<OwnerCommandService>,
    pub owner_queries: Arc<OwnerQueryService>,
    pub stats_queries: Arc<StatsQueryService>,
    pub uploads: Arc<UploadService>,
    pub provisioning: Arc<ProvisioningService>,
    token_manager: Arc<dyn TokenManager>,
}

impl ApplicationServices {
    pub fn new(repos: Repositories, adapters: Adapters) -> Self {
        let Adapters {
            password_hasher,
            token_manager,
            clock,
            slugger,
            sanitizer,
            storage,
        } = adapters;

        let uploads = Arc::new(UploadService::new(storage, Arc::clone(&clock)));

        let slug_service = Arc::new(ArticleSlugService::new(
            Arc::clone(&slugger),
            Arc::clone(&clock),
        ));

        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&repos.article_write),
            slug_service,
            sanitizer,
            Arc::clone(&uploads),
            Arc::clone(&clock),
        ));

        let article_queries = Arc::new(ArticleQueryService::new(
            Arc::clone(&repos.article_read),
            Arc::clone(&repos.article_write),
            Arc::clone(&repos.categories),
            Arc::clone(&clock),
        ));

        let category_commands = Arc::new(CategoryCommandService::new(
            Arc::clone(&repos.categories),
            slugger,
            Arc::clone(&clock),
        ));
        let category_queries = Arc::new(CategoryQueryService::new(Arc::clone(&repos.categories)));

        let owner_commands = Arc::new(OwnerCommandService::new(
            Arc::clone(&repos.owners),
            password_hasher,
            Arc::clone(&token_manager),
            Arc::clone(&clock),
        ));
        let owner_queries = Arc::new(OwnerQueryService::new(Arc::clone(&repos.owners)));

        let stats_queries = Arc::new(StatsQueryService::new(
            Arc::clone(&repos.article_stats),
            Arc::clone(&repos.categories),
            Arc::clone(&repos.owners),
            clock,
        ));

        let provisioning = Arc::new(ProvisioningService::new(
            Arc::clone(&repos.owners),
            Arc::clone(&repos.categories),
            Arc::clone(&owner_commands),
            Arc::clone(&category_commands),
        ));

        Self {
            article_commands,
            article_queries,
            category_commands,
            category_queries,
            owner_commands,
            owner_queries,
            stats_queries,
            uploads,
            provisioning,
            token_manager,
        }
    }

    pub fn token_manager(&self) -> Arc<dyn TokenManager> {
        Arc::clone(&self.token_manager)
    }

    /// Verifies a raw bearer token. Any owner holding a valid token may use
    /// every staff endpoint.
    pub async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedOwner> {
        self.token_manager.authenticate(token).await
    }
}
