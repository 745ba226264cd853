// src/bin/write_openapi_snapshot.rs
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

/// Writes the OpenAPI document to disk.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Output file.
    #[arg(long, env = "OPENAPI_SNAPSHOT_PATH", default_value = "spec/openapi.json")]
    output: PathBuf,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();
    newsroom_core::presentation::http::openapi::write_openapi_snapshot(&args.output)?;
    println!("OpenAPI snapshot written to {}", args.output.display());
    Ok(())
}
