//! Storage trait shared by the Postgres and in-memory backends

use async_trait::async_trait;
use trivia_core::{Category, NewQuestion, Question};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}

impl DbError {
    pub fn not_found(resource: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }
}

/// Row access for categories and questions.
///
/// Lists come back in ascending id order.
#[async_trait]
pub trait TriviaStore: Send + Sync {
    async fn list_categories(&self) -> Result<Vec<Category>, DbError>;

    /// Fails with [`DbError::NotFound`] for an unknown id.
    async fn get_category(&self, id: i32) -> Result<Category, DbError>;

    /// All questions, or only those whose category equals `category`.
    async fn list_questions(&self, category: Option<i32>) -> Result<Vec<Question>, DbError>;

    /// Fails with [`DbError::NotFound`] for an unknown id.
    async fn get_question(&self, id: i32) -> Result<Question, DbError>;

    async fn insert_question(&self, question: NewQuestion) -> Result<Question, DbError>;

    /// Fails with [`DbError::NotFound`] when nothing was deleted.
    async fn delete_question(&self, id: i32) -> Result<(), DbError>;
}
