//! HTTP server command

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use trivia_core::config::StorageBackend;
use trivia_server::db::open_store;
use trivia_server::{run_server, ServerConfig};

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum StorageArg {
    Postgres,
    Memory,
}

impl From<StorageArg> for StorageBackend {
    fn from(arg: StorageArg) -> Self {
        match arg {
            StorageArg::Postgres => StorageBackend::Postgres,
            StorageArg::Memory => StorageBackend::Memory,
        }
    }
}

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default from config: 127.0.0.1:5000)
    #[arg(long, short = 'b', env = "TRIVIA_BIND")]
    pub bind: Option<SocketAddr>,

    /// Database URL (overrides config)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Storage backend (overrides config)
    #[arg(long, value_enum)]
    pub storage: Option<StorageArg>,

    /// Skip loading the starter dataset into empty tables
    #[arg(long)]
    pub no_seed: bool,

    /// Config file (default: ~/.trivia/config.toml)
    #[arg(long, env = "TRIVIA_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let mut config = super::load_config(args.config)?;

    if let Some(bind) = args.bind {
        config.server.bind = bind;
    }
    if let Some(url) = args.database_url {
        config.database.url = url;
    }
    if let Some(storage) = args.storage {
        config.storage.backend = storage.into();
    }
    if args.no_seed {
        config.database.seed_on_start = false;
    }

    tracing::info!(
        bind = %config.server.bind,
        backend = ?config.storage.backend,
        "Starting trivia server"
    );

    let store = open_store(&config)
        .await
        .context("Failed to open trivia store")?;

    let server_config = ServerConfig {
        bind_addr: config.server.bind,
    };

    run_server(store, server_config)
        .await
        .context("Server error")?;

    Ok(())
}
