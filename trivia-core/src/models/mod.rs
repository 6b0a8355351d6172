//! Domain models with validation at construction
//!
//! Rows come back from the store as [`Category`] and [`Question`]; handlers
//! hand [`QuestionRecord`] to the JSON layer.

pub mod category;
pub mod lenient;
pub mod pagination;
pub mod question;
pub mod validation;

pub use category::{category_from_index, Category};
pub use pagination::{Paginated, Pagination, PaginationParams, QUESTIONS_PER_PAGE};
pub use question::{NewQuestion, Question, QuestionRecord};
pub use validation::ValidationError;
