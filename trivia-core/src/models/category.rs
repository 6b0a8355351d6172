//! Category rows

use serde::{Deserialize, Serialize};

/// A labeled grouping of questions (e.g. "Science").
///
/// Serialized as `{"id": 1, "type": "Science"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i32,
    #[serde(rename = "type")]
    pub kind: String,
}

impl Category {
    pub fn new(id: i32, kind: impl Into<String>) -> Self {
        Self {
            id,
            kind: kind.into(),
        }
    }
}

/// Map the zero-based category index sent by the add-question form onto a
/// stored category id. Stored ids start at 1.
pub const fn category_from_index(index: i32) -> i32 {
    index.saturating_add(1)
}
