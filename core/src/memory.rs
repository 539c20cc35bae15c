//! In-memory store implementation.

use crate::error::TodoError;
use crate::store::TodoStore;
use crate::todo::{self, Todo, TodoId};
use async_trait::async_trait;
use tokio::sync::RwLock;

/// The collection and its id counter, guarded together so an allocated id is
/// always appended under the same lock acquisition.
#[derive(Debug, Default)]
struct Inner {
    todos: Vec<Todo>,
    last_id: i64,
}

/// In-process todo store backed by an ordered list.
///
/// Insertion order is the `Vec` order; ids come from a monotonic counter and
/// are never reused within the process lifetime, including after deletes.
/// Constructed once per process and shared via `Arc`, so no module-level
/// mutable state exists anywhere.
///
/// Writers are serialized through a `tokio::sync::RwLock`; concurrent
/// mutations interleave in lock-acquisition order.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `(content, completed)` pairs, in
    /// order.
    ///
    /// Useful for demos and tests that want a non-empty starting list,
    /// including already-completed items.
    #[must_use]
    pub fn seeded<I, S>(seeds: I) -> Self
    where
        I: IntoIterator<Item = (S, bool)>,
        S: Into<String>,
    {
        let mut inner = Inner::default();
        for (content, completed) in seeds {
            inner.last_id += 1;
            inner.todos.push(Todo {
                id: TodoId::from_i64(inner.last_id),
                content: content.into(),
                completed,
            });
        }
        Self {
            inner: RwLock::new(inner),
        }
    }
}

#[async_trait]
impl TodoStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Todo>, TodoError> {
        let inner = self.inner.read().await;
        Ok(inner.todos.clone())
    }

    async fn create(&self, content: &str) -> Result<Todo, TodoError> {
        todo::validate_content(content).map_err(TodoError::Validation)?;

        let mut inner = self.inner.write().await;
        inner.last_id += 1;
        let todo = Todo::new(TodoId::from_i64(inner.last_id), content.to_string());
        inner.todos.push(todo.clone());
        Ok(todo)
    }

    async fn toggle(&self, id: TodoId) -> Result<Todo, TodoError> {
        let mut inner = self.inner.write().await;
        let todo = inner
            .todos
            .iter_mut()
            .find(|todo| todo.id == id)
            .ok_or(TodoError::NotFound(id))?;
        todo.completed = !todo.completed;
        Ok(todo.clone())
    }

    async fn delete(&self, id: TodoId) -> Result<bool, TodoError> {
        let mut inner = self.inner.write().await;
        let before = inner.todos.len();
        inner.todos.retain(|todo| todo.id != id);
        Ok(inner.todos.len() < before)
    }
}
