//! Question endpoints - listing, search, create, delete

use std::sync::Arc;

use axum::{
    extract::State,
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use trivia_core::models::{category_from_index, lenient};
use trivia_core::{
    search_questions, NewQuestion, Pagination, Question, QuestionRecord, ValidationError,
};

use super::categories::category_names;
use crate::db::DbError;
use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, Page, RowId};
use crate::http::server::AppState;

/// One page of questions, optionally restricted to a category
pub(crate) struct QuestionListing {
    pub questions: Vec<QuestionRecord>,
    /// Matching questions before slicing
    pub total: usize,
    pub current_category: Option<String>,
}

/// Resolve the category (unknown id is 404), filter, then slice `page`.
pub(crate) async fn questions_page(
    state: &AppState,
    category: Option<i32>,
    page: Pagination,
) -> Result<QuestionListing, ApiError> {
    let current_category = match category {
        Some(id) => Some(state.store.get_category(id).await?.kind),
        None => None,
    };

    let rows = state.store.list_questions(category).await?;
    let records: Vec<QuestionRecord> = rows.into_iter().map(Question::format).collect();
    let paged = page.paginate(records);

    tracing::debug!(
        ?category,
        page = paged.page,
        total = paged.total,
        returned = paged.items.len(),
        "listed questions"
    );

    Ok(QuestionListing {
        questions: paged.items,
        total: paged.total,
        current_category,
    })
}

#[derive(Debug, Serialize)]
pub struct QuestionsResponse {
    pub questions: Vec<QuestionRecord>,
    pub total_questions: usize,
    pub current_category: Option<String>,
    pub categories: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub questions: Vec<QuestionRecord>,
    pub total_questions: usize,
    pub current_category: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: String,
}

/// Body of POST /add. `category` is the zero-based index from the form.
#[derive(Debug, Deserialize)]
pub struct CreateQuestionRequest {
    pub question: String,
    pub answer: String,
    #[serde(deserialize_with = "lenient::int")]
    pub category: i32,
    #[serde(deserialize_with = "lenient::int")]
    pub difficulty: i32,
}

/// GET /questions?page=N
async fn list_questions(
    State(state): State<Arc<AppState>>,
    Page(page): Page,
) -> Result<Json<QuestionsResponse>, ApiError> {
    let listing = questions_page(&state, None, page).await?;
    let categories = category_names(&state).await?;

    Ok(Json(QuestionsResponse {
        questions: listing.questions,
        total_questions: listing.total,
        current_category: listing.current_category,
        categories,
    }))
}

/// POST /questions - case-insensitive search over every question
async fn search(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<SearchRequest>,
) -> Result<Json<SearchResponse>, ApiError> {
    let rows = state.store.list_questions(None).await?;
    let records = rows.into_iter().map(Question::format).collect();
    let questions = search_questions(records, &req.search_term);

    tracing::debug!(term = %req.search_term, hits = questions.len(), "search");

    Ok(Json(SearchResponse {
        total_questions: questions.len(),
        questions,
        current_category: None,
    }))
}

/// DELETE /questions/{id}
async fn delete_question(
    State(state): State<Arc<AppState>>,
    RowId(id): RowId,
) -> Result<Json<SuccessResponse>, ApiError> {
    state.store.get_question(id).await?;

    state
        .store
        .delete_question(id)
        .await
        .map_err(|e| ApiError::Unprocessable {
            reason: e.to_string(),
        })?;

    tracing::info!(id, "deleted question");
    Ok(Json(SuccessResponse { success: true }))
}

/// POST /add - every failure is 422
async fn create_question(
    State(state): State<Arc<AppState>>,
    body: Result<JsonBody<CreateQuestionRequest>, ApiError>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let JsonBody(req) = body.map_err(|e| ApiError::Unprocessable {
        reason: format!("{:?}", e),
    })?;

    let category = category_from_index(req.category);
    let new = NewQuestion::new(req.question, req.answer, category, req.difficulty)?;

    match state.store.get_category(category).await {
        Ok(_) => {}
        Err(DbError::NotFound { .. }) => {
            return Err(ValidationError::UnknownCategory { id: category }.into())
        }
        Err(e) => return Err(e.into()),
    }

    let created = state.store.insert_question(new).await.map_err(|e| {
        ApiError::Unprocessable {
            reason: e.to_string(),
        }
    })?;

    tracing::info!(id = created.id, category, "created question");
    Ok(Json(SuccessResponse { success: true }))
}

/// Question routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/questions", get(list_questions).post(search))
        .route("/questions/{id}", delete(delete_question))
        .route("/add", post(create_question))
}
