//! Quiz play endpoint

use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use trivia_core::{next_question, Question, QuestionRecord, QuizCategory, QuizTurn};

use crate::http::error::ApiError;
use crate::http::extractors::JsonBody;
use crate::http::server::AppState;

#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub previous_questions: Vec<i32>,
    pub quiz_category: QuizCategory,
    #[serde(default)]
    pub guess: serde_json::Value,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum QuizResponse {
    Next {
        question: QuestionRecord,
        guess: serde_json::Value,
        #[serde(rename = "previousQuestions")]
        previous_questions: Vec<i32>,
    },
    End {
        #[serde(rename = "forceEnd")]
        force_end: bool,
    },
}

/// POST /quizzes - every failure is 500
async fn play(
    State(state): State<Arc<AppState>>,
    body: Result<JsonBody<QuizRequest>, ApiError>,
) -> Result<Json<QuizResponse>, ApiError> {
    let JsonBody(req) = body.map_err(ApiError::into_internal)?;
    turn(&state, req).await.map(Json).map_err(ApiError::into_internal)
}

async fn turn(state: &AppState, req: QuizRequest) -> Result<QuizResponse, ApiError> {
    let category = if req.quiz_category.is_all() {
        None
    } else {
        let id = req.quiz_category.id;
        state.store.get_category(id).await?;
        Some(id)
    };

    let pool: Vec<QuestionRecord> = state
        .store
        .list_questions(category)
        .await?
        .into_iter()
        .map(Question::format)
        .collect();

    let next = next_question(&pool, &req.previous_questions, &mut rand::thread_rng());

    Ok(match next {
        QuizTurn::Question(question) => {
            tracing::debug!(id = question.id, ?category, "quiz question");
            QuizResponse::Next {
                question,
                guess: req.guess,
                previous_questions: req.previous_questions,
            }
        }
        QuizTurn::ForceEnd => QuizResponse::End { force_end: true },
    })
}

/// Quiz routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/quizzes", post(play))
}
