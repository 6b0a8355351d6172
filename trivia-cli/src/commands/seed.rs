//! Seed command - create tables and load the starter dataset into Postgres

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use trivia_server::db::{create_pool, migrations};

#[derive(Parser, Debug)]
pub struct SeedArgs {
    /// Database URL (overrides config)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Config file (default: ~/.trivia/config.toml)
    #[arg(long, env = "TRIVIA_CONFIG")]
    pub config: Option<PathBuf>,
}

pub async fn run_seed(args: SeedArgs) -> Result<()> {
    let config = super::load_config(args.config)?;
    let url = args.database_url.unwrap_or(config.database.url);

    let pool = create_pool(&url, config.database.max_connections)
        .await
        .context("Failed to create database pool")?;

    migrations::run(&pool)
        .await
        .context("Failed to create trivia tables")?;

    let inserted = migrations::seed(&pool)
        .await
        .context("Failed to seed trivia tables")?;

    if inserted == 0 {
        println!("Tables already hold categories, nothing seeded");
    } else {
        println!("Seeded {} questions", inserted);
    }
    Ok(())
}
