// src/bin/create_admin.rs
use anyhow::Result;
use clap::Parser;
use newsroom_core::{
    application::commands::owners::RegisterOwnerCommand,
    bootstrap::{build_services, init_tracing},
    config::AppConfig,
    domain::owner::Role,
    infrastructure::database,
};

/// Creates an admin account directly in the database.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    #[arg(long)]
    name: String,
    #[arg(long)]
    email: String,
    /// Read from `ADMIN_PASSWORD` when not passed on the command line.
    #[arg(long, env = "ADMIN_PASSWORD", hide_env_values = true)]
    password: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = AppConfig::from_env()?;
    init_tracing(false);

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;
    let services = build_services(&pool, &config)?;

    let owner = services
        .owner_commands
        .register(RegisterOwnerCommand {
            name: args.name,
            email: args.email,
            password: args.password,
            role: Some(Role::Admin),
        })
        .await?;

    println!("admin created: {} <{}>", owner.id, owner.email);
    Ok(())
}
