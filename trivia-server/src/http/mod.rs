//! HTTP server layer
//!
//! Axum server with:
//! - Permissive CORS on every route
//! - Request tracing
//! - Graceful shutdown
//! - JSON error envelopes, including unknown routes and wrong methods

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};
