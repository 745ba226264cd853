// src/bootstrap.rs
//! Process wiring shared by the server and the admin CLI.
use std::sync::Arc;

use anyhow::Result;
use sqlx::PgPool;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::application::{
    ports::{
        sanitizer::HtmlSanitizer,
        security::{PasswordHasher, TokenManager},
        storage::ObjectStorage,
        time::Clock,
        util::SlugGenerator,
    },
    services::{Adapters, ApplicationServices, Repositories},
};
use crate::config::AppConfig;
use crate::infrastructure::{
    repositories::{
        PostgresArticleReadRepository, PostgresArticleStatsRepository,
        PostgresArticleWriteRepository, PostgresCategoryRepository, PostgresOwnerRepository,
    },
    sanitizer::AmmoniaSanitizer,
    security::{password::Argon2PasswordHasher, token::JwtTokenManager},
    storage::{DisabledStorage, R2ObjectStorage},
    time::SystemClock,
    util::DefaultSlugGenerator,
};

const DEFAULT_LOG_FILTER: &str = "info,tower_http=info,sqlx=warn";

/// Installs the global subscriber. `RUST_LOG` overrides the default filter;
/// production output is JSON.
pub fn init_tracing(json: bool) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let registry = tracing_subscriber::registry().with(env_filter);

    let result = if json {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()
    } else {
        registry.with(tracing_subscriber::fmt::layer()).try_init()
    };

    if result.is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

pub fn build_services(pool: &PgPool, config: &AppConfig) -> Result<Arc<ApplicationServices>> {
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let repos = Repositories {
        article_write: Arc::new(PostgresArticleWriteRepository::new(pool.clone())),
        article_read: Arc::new(PostgresArticleReadRepository::new(pool.clone())),
        article_stats: Arc::new(PostgresArticleStatsRepository::new(pool.clone())),
        categories: Arc::new(PostgresCategoryRepository::new(pool.clone())),
        owners: Arc::new(PostgresOwnerRepository::new(pool.clone())),
    };

    let storage: Arc<dyn ObjectStorage> = match config.r2() {
        Some(r2) => Arc::new(R2ObjectStorage::from_config(r2)?),
        None => {
            tracing::warn!("R2_* is not set; uploads are disabled");
            Arc::new(DisabledStorage)
        }
    };

    let token_manager: Arc<dyn TokenManager> = Arc::new(JwtTokenManager::new(
        config.jwt_secret(),
        config.token_ttl(),
        Arc::clone(&clock),
    )?);
    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);
    let sanitizer: Arc<dyn HtmlSanitizer> = Arc::new(AmmoniaSanitizer::new());

    let adapters = Adapters {
        password_hasher,
        token_manager,
        clock,
        slugger,
        sanitizer,
        storage,
    };

    Ok(Arc::new(ApplicationServices::new(repos, adapters)))
}
