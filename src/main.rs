use anyhow::Result;
use newsroom_core::{
    bootstrap::{build_services, init_tracing},
    config::AppConfig,
    infrastructure::database,
    presentation::http::{
        routes::{RouterOptions, build_router_with_options},
        state::HttpState,
    },
};
use std::net::SocketAddr;
use tokio::signal;

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err:#}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    let config = AppConfig::from_env()?;
    init_tracing(config.is_production());

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;

    let services = build_services(&pool, &config)?;

    if services
        .provisioning
        .ensure_initial_admin(config.initial_admin())
        .await?
    {
        tracing::info!("initial admin created");
    }
    let seeded = services.provisioning.seed_default_categories().await?;
    if seeded > 0 {
        tracing::info!(count = seeded, "default categories seeded");
    }

    let app = build_router_with_options(
        HttpState { services },
        RouterOptions {
            allowed_origins: config.allowed_origins().to_vec(),
            rate_limit: Some(config.rate_limit()),
        },
    );

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install CTRL+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
