//! Validation error types

use std::fmt;

/// Validation error for incoming questions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field is empty when it shouldn't be
    Empty { field: &'static str },

    /// Question points at a category id that does not exist
    UnknownCategory { id: i32 },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::UnknownCategory { id } => write!(f, "category {} does not exist", id),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        assert_eq!(
            ValidationError::Empty { field: "answer" }.to_string(),
            "answer cannot be empty"
        );
        assert_eq!(
            ValidationError::UnknownCategory { id: 42 }.to_string(),
            "category 42 does not exist"
        );
    }
}
