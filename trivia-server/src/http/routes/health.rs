//! Liveness plus a store round-trip
//!
//! Reports how many categories the store holds. A store that cannot answer
//! turns the check into a 503 so supervisors restart or drain the process.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

use crate::http::server::AppState;

#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub status: &'static str,
    pub version: &'static str,
    /// Category rows visible through the store, absent when it failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<usize>,
}

/// GET /health
async fn health(State(state): State<Arc<AppState>>) -> (StatusCode, Json<HealthReport>) {
    let version = env!("CARGO_PKG_VERSION");

    match state.store.list_categories().await {
        Ok(categories) => (
            StatusCode::OK,
            Json(HealthReport {
                status: "ok",
                version,
                categories: Some(categories.len()),
            }),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "health check could not reach the store");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthReport {
                    status: "unavailable",
                    version,
                    categories: None,
                }),
            )
        }
    }
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStore;

    #[tokio::test]
    async fn counts_seeded_categories() {
        let state = Arc::new(AppState::new(Arc::new(MemoryStore::seeded())));
        let (status, Json(report)) = health(State(state)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(report.status, "ok");
        assert_eq!(report.categories, Some(6));
    }

    #[tokio::test]
    async fn empty_store_is_still_healthy() {
        let state = Arc::new(AppState::new(Arc::new(MemoryStore::new())));
        let (status, Json(report)) = health(State(state)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(report.categories, Some(0));
    }
}
