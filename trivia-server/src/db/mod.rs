//! Database layer - store trait, Postgres repositories, in-memory tables
//!
//! Handlers only see [`TriviaStore`]. Failures come back as [`DbError`] and
//! are mapped to HTTP errors once, in `http::error`.

pub mod memory;
pub mod migrations;
pub mod pool;
pub mod repos;
pub mod seed;
pub mod store;

pub use memory::MemoryStore;
pub use pool::create_pool;
pub use repos::PgStore;
pub use store::{DbError, TriviaStore};

use std::sync::Arc;

use trivia_core::config::{StorageBackend, TriviaConfig};

/// Open the configured backend, creating and seeding tables as configured.
pub async fn open_store(config: &TriviaConfig) -> Result<Arc<dyn TriviaStore>, DbError> {
    match config.storage.backend {
        StorageBackend::Memory => {
            tracing::info!("Using in-memory store with bundled dataset");
            Ok(Arc::new(MemoryStore::seeded()))
        }
        StorageBackend::Postgres => {
            let pool = create_pool(&config.database.url, config.database.max_connections).await?;
            migrations::run(&pool).await?;
            if config.database.seed_on_start {
                migrations::seed(&pool).await?;
            }
            Ok(Arc::new(PgStore::new(pool)))
        }
    }
}
