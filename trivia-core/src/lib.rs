//! trivia-core: domain model for the trivia API
//!
//! Holds everything that does not touch the network or the database:
//! - Category and question types plus the JSON record formatter
//! - Fixed-size page slicing
//! - Case-insensitive question search
//! - Quiz question selection
//! - Configuration loading

pub mod config;
pub mod error;
pub mod models;
pub mod quiz;
pub mod search;

pub use config::TriviaConfig;
pub use error::{Result, TriviaError};
pub use models::{
    Category, NewQuestion, Paginated, Pagination, Question, QuestionRecord, ValidationError,
    QUESTIONS_PER_PAGE,
};
pub use quiz::{next_question, QuizCategory, QuizTurn};
pub use search::search_questions;
