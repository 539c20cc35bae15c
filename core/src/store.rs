//! The store trait: the seam between HTTP handlers and todo data.

use crate::error::TodoError;
use crate::todo::{Todo, TodoId};
use async_trait::async_trait;

/// Owns the todo collection and performs its mutation operations.
///
/// Implementations have exclusive ownership of the records; callers only ever
/// receive values. Handlers hold the store as `Arc<dyn TodoStore>` so the
/// backend can be swapped without touching the HTTP layer.
///
/// # Semantics
///
/// - `list` returns live todos in insertion order.
/// - `create` validates content, allocates the next id, and appends an
///   uncompleted record.
/// - `toggle` flips `completed` on an existing record and errors with
///   [`TodoError::NotFound`] when the id is absent.
/// - `delete` is idempotent: removing a missing id is not an error, and the
///   returned bool reports whether a record was actually removed.
#[async_trait]
pub trait TodoStore: Send + Sync + 'static {
    /// Returns all live todos in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::Storage`] if the backend fails.
    async fn list(&self) -> Result<Vec<Todo>, TodoError>;

    /// Creates a new todo with the given content and `completed = false`.
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::Validation`] if `content` is blank or too long,
    /// or [`TodoError::Storage`] if the backend fails.
    async fn create(&self, content: &str) -> Result<Todo, TodoError>;

    /// Flips the `completed` flag of the todo with the given id and returns
    /// the updated record.
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::NotFound`] if no todo has that id, or
    /// [`TodoError::Storage`] if the backend fails.
    async fn toggle(&self, id: TodoId) -> Result<Todo, TodoError>;

    /// Removes the todo with the given id if present.
    ///
    /// Returns `true` when a record was removed and `false` when the id was
    /// already absent.
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::Storage`] if the backend fails.
    async fn delete(&self, id: TodoId) -> Result<bool, TodoError>;
}
