//! Domain types for todos.
//!
//! A todo is the sole entity of the application: an id assigned at creation,
//! immutable content, and a completion flag flipped by exactly one operation.

use serde::{Deserialize, Serialize};

/// Maximum accepted content length, in characters.
pub const MAX_CONTENT_LEN: usize = 500;

/// Unique identifier for a todo.
///
/// Ids are sequential integers assigned by the store at creation time and
/// never reused within a process lifetime (memory store) or table lifetime
/// (postgres `BIGSERIAL`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TodoId(i64);

impl TodoId {
    /// Creates a `TodoId` from a raw integer.
    #[must_use]
    pub const fn from_i64(id: i64) -> Self {
        Self(id)
    }

    /// Returns the inner integer.
    #[must_use]
    pub const fn as_i64(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for TodoId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// A single todo record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Unique identifier
    pub id: TodoId,
    /// Text of the todo; immutable after creation (there is no edit operation)
    pub content: String,
    /// Whether the todo is completed
    pub completed: bool,
}

impl Todo {
    /// Creates a new, uncompleted todo.
    #[must_use]
    pub const fn new(id: TodoId, content: String) -> Self {
        Self {
            id,
            content,
            completed: false,
        }
    }
}

/// Validates content supplied to the create operation.
///
/// The presence check trims first, so whitespace-only input is rejected.
/// Stored content keeps its original spelling.
///
/// # Errors
///
/// Returns a message describing the violation when `content` is blank or
/// longer than [`MAX_CONTENT_LEN`] characters.
pub fn validate_content(content: &str) -> Result<(), String> {
    if content.trim().is_empty() {
        return Err("Todo content cannot be empty".to_string());
    }

    if content.chars().count() > MAX_CONTENT_LEN {
        return Err(format!(
            "Todo content too long (max {MAX_CONTENT_LEN} characters)"
        ));
    }

    Ok(())
}
