//! Postgres repositories and the [`PgStore`] that ties them together

pub mod categories;
pub mod questions;

use async_trait::async_trait;
use sqlx::PgPool;
use trivia_core::{Category, NewQuestion, Question};

pub use categories::CategoryRepo;
pub use questions::QuestionRepo;

use super::store::{DbError, TriviaStore};

/// [`TriviaStore`] backed by a Postgres pool
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TriviaStore for PgStore {
    async fn list_categories(&self) -> Result<Vec<Category>, DbError> {
        CategoryRepo::new(&self.pool).list().await
    }

    async fn get_category(&self, id: i32) -> Result<Category, DbError> {
        CategoryRepo::new(&self.pool).get(id).await
    }

    async fn list_questions(&self, category: Option<i32>) -> Result<Vec<Question>, DbError> {
        QuestionRepo::new(&self.pool).list(category).await
    }

    async fn get_question(&self, id: i32) -> Result<Question, DbError> {
        QuestionRepo::new(&self.pool).get(id).await
    }

    async fn insert_question(&self, question: NewQuestion) -> Result<Question, DbError> {
        QuestionRepo::new(&self.pool).insert(question).await
    }

    async fn delete_question(&self, id: i32) -> Result<(), DbError> {
        QuestionRepo::new(&self.pool).delete(id).await
    }
}
