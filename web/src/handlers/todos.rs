//! Todo CRUD handlers.
//!
//! Each handler follows the same pipeline: extract, call the store, render
//! the result with a pure view function. Structural validation happens at the
//! extractor boundary (`Path<i64>` rejects non-numeric ids with 400 before
//! the store is reached); semantic validation (blank content) comes back from
//! the store as a typed error and is mapped by [`AppError`](crate::AppError).

use axum::Form;
use axum::extract::{Path, State};
use axum::response::Html;
use hypertodo_core::TodoId;
use serde::Deserialize;

use crate::state::AppState;
use crate::views;
use crate::WebResult;

/// Form body of `POST /todos`.
#[derive(Debug, Deserialize)]
pub struct CreateTodo {
    /// Text of the new todo.
    pub content: String,
}

/// `GET /todos` — the full list fragment, items in insertion order plus the
/// entry form.
pub async fn list_todos(State(state): State<AppState>) -> WebResult<Html<String>> {
    let todos = state.store.list().await?;
    Ok(Html(views::todo_list(&todos)))
}

/// `POST /todos` — create a todo and return its row fragment.
///
/// The entry form inserts the fragment before itself, so the new row appears
/// at the end of the list without re-rendering it.
pub async fn create_todo(
    State(state): State<AppState>,
    Form(form): Form<CreateTodo>,
) -> WebResult<Html<String>> {
    let todo = state.store.create(&form.content).await?;
    tracing::debug!(id = %todo.id, "todo created");
    Ok(Html(views::todo_item(&todo)))
}

/// `POST /todos/toggle/:id` — flip completion and return the updated row
/// fragment, which the client swaps over the old one.
///
/// A missing id is a 404. Answering with an empty 200 instead would make the
/// client swap nothing over the row and erase it, so the error must surface.
pub async fn toggle_todo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> WebResult<Html<String>> {
    let todo = state.store.toggle(TodoId::from_i64(id)).await?;
    Ok(Html(views::todo_item(&todo)))
}

/// `DELETE /todos/:id` — remove the todo and return an empty body, which the
/// client swaps over the row to remove it.
///
/// Idempotent: deleting an already-absent id still succeeds.
pub async fn delete_todo(State(state): State<AppState>, Path(id): Path<i64>) -> WebResult<()> {
    let removed = state.store.delete(TodoId::from_i64(id)).await?;
    if !removed {
        tracing::debug!(id, "delete of missing todo ignored");
    }
    Ok(())
}
