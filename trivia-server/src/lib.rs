//! trivia-server: HTTP API over the trivia dataset
//!
//! Exposes categories and questions as JSON, plus a quiz endpoint that
//! serves random unseen questions. Storage sits behind [`db::TriviaStore`]
//! so the router runs against Postgres or an in-memory table set.

pub mod db;
pub mod http;

pub use db::{DbError, MemoryStore, PgStore, TriviaStore};
pub use http::{build_router, run_server, ApiError, AppState, ServerConfig, ServerError};
