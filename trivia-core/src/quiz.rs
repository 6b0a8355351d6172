//! Quiz question selection
//!
//! The client replays the ids it has already seen on every request; there is
//! no server-side session. A turn either yields an unseen question from the
//! pool or ends the quiz.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::{lenient, QuestionRecord};

/// Category type the frontend sends when "All" is selected.
pub const ALL_CATEGORIES: &str = "click";

/// `quiz_category` as posted by the play screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizCategory {
    #[serde(deserialize_with = "lenient::int")]
    pub id: i32,
    #[serde(rename = "type")]
    pub kind: String,
}

impl QuizCategory {
    /// Whether the quiz draws from every category.
    pub fn is_all(&self) -> bool {
        self.kind == ALL_CATEGORIES
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizTurn {
    Question(QuestionRecord),
    ForceEnd,
}

/// Pick the next question uniformly from `pool` minus `previous`.
///
/// Ends the quiz when the client has seen as many questions as the pool
/// holds, or when nothing unseen is left.
pub fn next_question<R>(pool: &[QuestionRecord], previous: &[i32], rng: &mut R) -> QuizTurn
where
    R: Rng + ?Sized,
{
    if previous.len() == pool.len() {
        return QuizTurn::ForceEnd;
    }

    let seen: HashSet<i32> = previous.iter().copied().collect();
    let unseen: Vec<&QuestionRecord> = pool.iter().filter(|q| !seen.contains(&q.id)).collect();

    match unseen.choose(rng) {
        Some(q) => QuizTurn::Question((*q).clone()),
        None => {
            tracing::debug!(
                pool = pool.len(),
                previous = previous.len(),
                "no unseen questions left"
            );
            QuizTurn::ForceEnd
        }
    }
}
