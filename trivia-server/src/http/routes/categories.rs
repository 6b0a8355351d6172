//! Category endpoints

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use trivia_core::QuestionRecord;

use super::questions::questions_page;
use crate::http::error::ApiError;
use crate::http::extractors::{Page, RowId};
use crate::http::server::AppState;

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<QuestionRecord>,
    pub total_questions: usize,
    pub current_category: Option<String>,
}

/// Category type names in id order. Store failures are 422.
pub(crate) async fn category_names(state: &AppState) -> Result<Vec<String>, ApiError> {
    let categories = state.store.list_categories().await?;
    Ok(categories.into_iter().map(|c| c.kind).collect())
}

/// GET /categories
async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CategoriesResponse>, ApiError> {
    let categories = category_names(&state).await?;

    Ok(Json(CategoriesResponse {
        success: true,
        categories,
    }))
}

/// GET /categories/{id}/questions - every failure is reported as 404
async fn questions_by_category(
    State(state): State<Arc<AppState>>,
    RowId(id): RowId,
    Page(page): Page,
) -> Result<Json<CategoryQuestionsResponse>, ApiError> {
    let listing = questions_page(&state, Some(id), page)
        .await
        .map_err(ApiError::into_not_found)?;

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        questions: listing.questions,
        total_questions: listing.total,
        current_category: listing.current_category,
    }))
}

/// Category routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/categories/{id}/questions", get(questions_by_category))
}
