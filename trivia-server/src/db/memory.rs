//! In-process tables
//!
//! Used by `--storage memory` for demos and by the router tests. Ids are
//! handed out from a counter and never reused after a delete.

use async_trait::async_trait;
use tokio::sync::RwLock;
use trivia_core::{Category, NewQuestion, Question};

use super::seed;
use super::store::{DbError, TriviaStore};

#[derive(Debug, Default)]
struct Tables {
    categories: Vec<Category>,
    questions: Vec<Question>,
    next_question_id: i32,
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    /// Empty tables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tables holding the bundled dataset.
    pub fn seeded() -> Self {
        let categories = seed::CATEGORIES
            .iter()
            .enumerate()
            .map(|(i, kind)| Category::new(i as i32 + 1, *kind))
            .collect();

        let questions: Vec<Question> = seed::QUESTIONS
            .iter()
            .enumerate()
            .map(|(i, q)| Question {
                id: i as i32 + 1,
                question: q.question.to_string(),
                answer: q.answer.to_string(),
                category: q.category,
                difficulty: q.difficulty,
            })
            .collect();

        let next_question_id = questions.len() as i32 + 1;

        Self {
            tables: RwLock::new(Tables {
                categories,
                questions,
                next_question_id,
            }),
        }
    }

    /// Add a category with the next free id.
    pub async fn add_category(&self, kind: impl Into<String>) -> Category {
        let mut tables = self.tables.write().await;
        let id = tables.categories.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        let category = Category::new(id, kind);
        tables.categories.push(category.clone());
        category
    }
}

#[async_trait]
impl TriviaStore for MemoryStore {
    async fn list_categories(&self) -> Result<Vec<Category>, DbError> {
        Ok(self.tables.read().await.categories.clone())
    }

    async fn get_category(&self, id: i32) -> Result<Category, DbError> {
        self.tables
            .read()
            .await
            .categories
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| DbError::not_found("category", id))
    }

    async fn list_questions(&self, category: Option<i32>) -> Result<Vec<Question>, DbError> {
        let tables = self.tables.read().await;
        Ok(tables
            .questions
            .iter()
            .filter(|q| category.map_or(true, |c| q.category == c))
            .cloned()
            .collect())
    }

    async fn get_question(&self, id: i32) -> Result<Question, DbError> {
        self.tables
            .read()
            .await
            .questions
            .iter()
            .find(|q| q.id == id)
            .cloned()
            .ok_or_else(|| DbError::not_found("question", id))
    }

    async fn insert_question(&self, question: NewQuestion) -> Result<Question, DbError> {
        let mut tables = self.tables.write().await;
        let id = tables.next_question_id.max(1);
        tables.next_question_id = id + 1;

        let question = question.into_question(id);
        tables.questions.push(question.clone());
        Ok(question)
    }

    async fn delete_question(&self, id: i32) -> Result<(), DbError> {
        let mut tables = self.tables.write().await;
        let before = tables.questions.len();
        tables.questions.retain(|q| q.id != id);

        if tables.questions.len() == before {
            return Err(DbError::not_found("question", id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn seeded_matches_dataset() {
        let store = MemoryStore::seeded();
        assert_eq!(store.list_categories().await.unwrap().len(), seed::CATEGORIES.len());
        assert_eq!(store.list_questions(None).await.unwrap().len(), seed::QUESTIONS.len());
        assert_eq!(store.get_category(1).await.unwrap().kind, "Science");
    }

    #[tokio::test]
    async fn filter_by_category() {
        let store = MemoryStore::seeded();
        let science = store.list_questions(Some(1)).await.unwrap();
        assert_eq!(science.len(), 3);
        assert!(science.iter().all(|q| q.category == 1));

        assert!(store.list_questions(Some(99)).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn ids_are_not_reused() {
        let store = MemoryStore::new();
        let first = store
            .insert_question(NewQuestion::new("Q1", "A1", 1, 1).unwrap())
            .await
            .unwrap();
        store.delete_question(first.id).await.unwrap();

        let second = store
            .insert_question(NewQuestion::new("Q2", "A2", 1, 1).unwrap())
            .await
            .unwrap();
        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn delete_missing_is_not_found() {
        let store = MemoryStore::seeded();
        let err = store.delete_question(9999).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { resource: "question", .. }));
    }

    #[tokio::test]
    async fn add_category_takes_next_id() {
        let store = MemoryStore::seeded();
        let c = store.add_category("Music").await;
        assert_eq!(c.id, seed::CATEGORIES.len() as i32 + 1);
        assert_eq!(store.get_category(c.id).await.unwrap(), c);
    }
}
