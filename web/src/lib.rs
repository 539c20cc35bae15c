//! Axum HTTP layer for Hypertodo.
//!
//! Every route in this crate returns HTML, not JSON: full documents for the
//! initial page load, partial fragments for everything after. The fragments
//! carry htmx attributes telling the client where to splice the response into
//! the existing page, so the server stays the single source of markup.
//!
//! # Request Flow
//!
//! 1. **HTTP request** arrives at an Axum handler
//! 2. **Extract data** from path or form body (structural validation here)
//! 3. **Call the store** operation (`list` / `create` / `toggle` / `delete`)
//! 4. **Render** the result to a fragment with a pure `views` function
//! 5. **Return** the fragment as the response body
//!
//! # Routes
//!
//! ```text
//! GET    /                  full page shell with the click-me button
//! POST   /clicked           static fragment with the Todo trigger button
//! GET    /todos             todo-list fragment (items + entry form)
//! POST   /todos             create; returns the new item's fragment
//! POST   /todos/toggle/:id  toggle; returns the updated item's fragment
//! DELETE /todos/:id         delete; returns an empty body
//! GET    /health            liveness probe
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod handlers;
pub mod state;
pub mod views;

// Re-export key types for convenience
pub use error::AppError;
pub use state::AppState;

use axum::Router;
use axum::routing::{delete, get, post};
use tower_http::trace::TraceLayer;

/// Result type alias for web handlers.
pub type WebResult<T> = Result<T, AppError>;

/// Builds the application router over the given state.
///
/// All routes, including the health probe, share the one [`AppState`]; the
/// trace layer logs each request at the level configured by the subscriber.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::pages::index))
        .route("/clicked", post(handlers::pages::clicked))
        .route(
            "/todos",
            get(handlers::todos::list_todos).post(handlers::todos::create_todo),
        )
        .route("/todos/toggle/:id", post(handlers::todos::toggle_todo))
        .route("/todos/:id", delete(handlers::todos::delete_todo))
        .route("/health", get(handlers::health::health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
