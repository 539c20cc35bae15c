//! Application state for Axum handlers.

use hypertodo_core::TodoStore;
use std::sync::Arc;

/// Application state shared across all HTTP handlers.
///
/// Holds the one store handle for the process. The store is a trait object so
/// the same router serves the in-memory and the `PostgreSQL` backend; which
/// one is picked at startup is the binary's business, not the handlers'.
#[derive(Clone)]
pub struct AppState {
    /// The todo store backing every mutation and query.
    pub store: Arc<dyn TodoStore>,
}

impl AppState {
    /// Create a new application state over the given store.
    #[must_use]
    pub fn new(store: Arc<dyn TodoStore>) -> Self {
        Self { store }
    }
}
