//! Table bootstrap and seeding for the Postgres backend

use sqlx::PgPool;

use super::seed;
use super::store::DbError;

/// Create the `categories` and `questions` tables if they are missing.
pub async fn run(pool: &PgPool) -> Result<(), DbError> {
    tracing::info!("Ensuring trivia tables exist...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS categories (
            id SERIAL PRIMARY KEY,
            "type" TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS questions (
            id SERIAL PRIMARY KEY,
            question TEXT NOT NULL,
            answer TEXT NOT NULL,
            category INTEGER NOT NULL,
            difficulty INTEGER NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_questions_category ON questions(category)")
        .execute(pool)
        .await?;

    Ok(())
}

/// Insert the bundled dataset when no categories exist yet.
///
/// Returns the number of questions inserted (0 when already seeded).
pub async fn seed(pool: &PgPool) -> Result<usize, DbError> {
    let (existing,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM categories")
        .fetch_one(pool)
        .await?;

    if existing > 0 {
        tracing::debug!(existing, "categories present, skipping seed");
        return Ok(0);
    }

    let mut tx = pool.begin().await?;

    for kind in seed::CATEGORIES {
        sqlx::query(r#"INSERT INTO categories ("type") VALUES ($1)"#)
            .bind(*kind)
            .execute(&mut *tx)
            .await?;
    }

    for q in seed::QUESTIONS {
        sqlx::query(
            "INSERT INTO questions (question, answer, category, difficulty) VALUES ($1, $2, $3, $4)",
        )
        .bind(q.question)
        .bind(q.answer)
        .bind(q.category)
        .bind(q.difficulty)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    tracing::info!(
        categories = seed::CATEGORIES.len(),
        questions = seed::QUESTIONS.len(),
        "Seeded trivia dataset"
    );
    Ok(seed::QUESTIONS.len())
}
