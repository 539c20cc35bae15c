//! Domain types and store for the Hypertodo application.
//!
//! This crate owns the todo collection and its mutation operations. The
//! [`TodoStore`] trait is the single seam between the HTTP layer and the
//! data: handlers call it, implementations own the records exclusively, and
//! the rendering layer only ever sees values returned from it.
//!
//! Two implementations exist:
//!
//! - [`MemoryStore`] (this crate) — an in-process ordered list guarded by a
//!   `tokio::sync::RwLock`, suitable for demos and tests.
//! - `PostgresTodoStore` (`hypertodo-postgres`) — a single-table relational
//!   store for deployments that want the data to outlive the process.
//!
//! # Example
//!
//! ```
//! use hypertodo_core::{MemoryStore, TodoStore};
//!
//! # async fn example() -> Result<(), hypertodo_core::TodoError> {
//! let store = MemoryStore::new();
//!
//! let todo = store.create("buy milk").await?;
//! assert!(!todo.completed);
//!
//! let todo = store.toggle(todo.id).await?;
//! assert!(todo.completed);
//!
//! assert!(store.delete(todo.id).await?);
//! assert!(store.list().await?.is_empty());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod memory;
pub mod store;
pub mod todo;

// Re-export key types for convenience
pub use error::TodoError;
pub use memory::MemoryStore;
pub use store::TodoStore;
pub use todo::{Todo, TodoId};
