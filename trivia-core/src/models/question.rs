//! Question rows, the JSON record formatter, and validated inserts

use serde::{Deserialize, Serialize};

use super::validation::ValidationError;

/// A stored trivia question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}

/// Plain key-value form of a [`Question`] as it appears in responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}

impl Question {
    /// Response form of this row.
    pub fn format(self) -> QuestionRecord {
        QuestionRecord::from(self)
    }
}

impl From<Question> for QuestionRecord {
    fn from(q: Question) -> Self {
        Self {
            id: q.id,
            question: q.question,
            answer: q.answer,
            category: q.category,
            difficulty: q.difficulty,
        }
    }
}

/// A question that passed validation and is ready to insert.
///
/// The id is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    question: String,
    answer: String,
    category: i32,
    difficulty: i32,
}

impl NewQuestion {
    /// Validate question and answer text.
    ///
    /// Category existence is checked by the caller against the store.
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
        category: i32,
        difficulty: i32,
    ) -> Result<Self, ValidationError> {
        let question = question.into();
        let answer = answer.into();

        if question.is_empty() {
            return Err(ValidationError::Empty { field: "question" });
        }
        if answer.is_empty() {
            return Err(ValidationError::Empty { field: "answer" });
        }

        Ok(Self {
            question,
            answer,
            category,
            difficulty,
        })
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn category(&self) -> i32 {
        self.category
    }

    pub fn difficulty(&self) -> i32 {
        self.difficulty
    }

    /// Attach a store-assigned id.
    pub fn into_question(self, id: i32) -> Question {
        Question {
            id,
            question: self.question,
            answer: self.answer,
            category: self.category,
            difficulty: self.difficulty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn format_keeps_every_field() {
        let q = Question {
            id: 21,
            question: "Who discovered penicillin?".into(),
            answer: "Alexander Fleming".into(),
            category: 1,
            difficulty: 3,
        };

        let record = serde_json::to_value(q.format()).unwrap();
        assert_eq!(
            record,
            json!({
                "id": 21,
                "question": "Who discovered penicillin?",
                "answer": "Alexander Fleming",
                "category": 1,
                "difficulty": 3
            })
        );
    }

    #[test]
    fn rejects_empty_question() {
        let err = NewQuestion::new("", "answer", 1, 1).unwrap_err();
        assert!(matches!(err, ValidationError::Empty { field: "question" }));
    }

    #[test]
    fn rejects_empty_answer() {
        let err = NewQuestion::new("question", "", 1, 1).unwrap_err();
        assert!(matches!(err, ValidationError::Empty { field: "answer" }));
    }

    #[test]
    fn into_question_attaches_id() {
        let q = NewQuestion::new("Q", "A", 2, 4).unwrap().into_question(7);
        assert_eq!(q.id, 7);
        assert_eq!(q.category, 2);
        assert_eq!(q.difficulty, 4);
    }
}
