//! voca-server entry point
//!
//! Loads configuration from flags/environment, connects to Postgres,
//! bootstraps the singleton vocabulary document, and serves the API.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use voca_server::db::{create_pool, migrations};
use voca_server::http::{run_server, ServerConfig};

#[derive(Parser, Debug)]
#[command(
    name = "voca-server",
    version,
    about = "HTTP backend for a vocabulary learning list"
)]
struct Args {
    /// Address to bind to
    #[arg(long, short = 'b', env = "BIND_ADDR", default_value = "127.0.0.1:5050")]
    bind: SocketAddr,

    /// Postgres connection string
    #[arg(long, env = "DATABASE_URL")]
    database_url: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .init();

    let args = Args::parse();

    let pool = create_pool(&args.database_url)
        .await
        .context("Failed to create database pool")?;

    // Ensure the singleton vocabulary document exists before serving.
    migrations::run(&pool)
        .await
        .context("Failed to run migrations")?;

    let config = ServerConfig { bind_addr: args.bind };
    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
