//! Error types for store operations.

use crate::todo::TodoId;
use thiserror::Error;

/// Errors produced by [`TodoStore`](crate::TodoStore) operations.
#[derive(Debug, Error)]
pub enum TodoError {
    /// Required input was missing or malformed (e.g. blank content).
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The referenced todo does not exist.
    #[error("Todo with id {0} not found")]
    NotFound(TodoId),

    /// The storage backend failed.
    #[error("Storage error: {0}")]
    Storage(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_display() {
        let err = TodoError::Validation("Todo content cannot be empty".to_string());
        assert_eq!(
            err.to_string(),
            "Validation failed: Todo content cannot be empty"
        );
    }

    #[test]
    fn not_found_display() {
        let err = TodoError::NotFound(TodoId::from_i64(7));
        assert_eq!(err.to_string(), "Todo with id 7 not found");
    }
}
