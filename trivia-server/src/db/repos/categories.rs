//! Category repository (read-only)

use sqlx::{PgPool, Row};
use trivia_core::Category;

use crate::db::store::DbError;

pub struct CategoryRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> CategoryRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Category>, DbError> {
        let rows = sqlx::query(r#"SELECT id, "type" FROM categories ORDER BY id"#)
            .fetch_all(self.pool)
            .await?;

        Ok(rows
            .into_iter()
            .map(|r| Category::new(r.get("id"), r.get::<String, _>("type")))
            .collect())
    }

    pub async fn get(&self, id: i32) -> Result<Category, DbError> {
        let row = sqlx::query(r#"SELECT id, "type" FROM categories WHERE id = $1"#)
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::not_found("category", id))?;

        Ok(Category::new(row.get("id"), row.get::<String, _>("type")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, migrations};

    // Run with: DATABASE_URL=postgres://... cargo test -p trivia-server -- --ignored

    #[tokio::test]
    #[ignore = "requires database"]
    async fn lists_seeded_categories_in_order() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url, 2).await.expect("pool creation failed");
        migrations::run(&pool).await.unwrap();
        migrations::seed(&pool).await.unwrap();

        let categories = CategoryRepo::new(&pool).list().await.unwrap();
        assert!(categories.windows(2).all(|w| w[0].id < w[1].id));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn unknown_category_is_not_found() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url, 2).await.expect("pool creation failed");
        migrations::run(&pool).await.unwrap();

        let err = CategoryRepo::new(&pool).get(-1).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { resource: "category", .. }));
    }
}
