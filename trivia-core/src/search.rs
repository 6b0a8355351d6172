//! Case-insensitive substring search over question text

use crate::models::QuestionRecord;

/// Keep records whose question text contains `term`, ignoring case.
///
/// An empty term matches everything. Order is preserved.
pub fn search_questions(records: Vec<QuestionRecord>, term: &str) -> Vec<QuestionRecord> {
    let needle = term.to_lowercase();
    records
        .into_iter()
        .filter(|r| r.question.to_lowercase().contains(&needle))
        .collect()
}
