//! Question repository
//!
//! - list: optional category filter in a single query
//! - insert: RETURNING id, no read-back
//! - delete: rows_affected decides not-found

use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use trivia_core::{NewQuestion, Question};

use crate::db::store::DbError;

pub struct QuestionRepo<'a> {
    pool: &'a PgPool,
}

fn question_from_row(r: PgRow) -> Question {
    Question {
        id: r.get("id"),
        question: r.get("question"),
        answer: r.get("answer"),
        category: r.get("category"),
        difficulty: r.get("difficulty"),
    }
}

impl<'a> QuestionRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, category: Option<i32>) -> Result<Vec<Question>, DbError> {
        let rows = sqlx::query(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE $1::INTEGER IS NULL OR category = $1
            ORDER BY id
            "#,
        )
        .bind(category)
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(question_from_row).collect())
    }

    pub async fn get(&self, id: i32) -> Result<Question, DbError> {
        sqlx::query(
            "SELECT id, question, answer, category, difficulty FROM questions WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .map(question_from_row)
        .ok_or_else(|| DbError::not_found("question", id))
    }

    pub async fn insert(&self, question: NewQuestion) -> Result<Question, DbError> {
        let (id,): (i32,) = sqlx::query_as(
            r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(question.question())
        .bind(question.answer())
        .bind(question.category())
        .bind(question.difficulty())
        .fetch_one(self.pool)
        .await?;

        Ok(question.into_question(id))
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("question", id));
        }
        Ok(())
    }
}
