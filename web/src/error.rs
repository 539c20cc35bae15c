//! Error types for web handlers.
//!
//! This module bridges between [`TodoError`] and HTTP responses. Because the
//! wire format of this application is HTML, error bodies are minimal HTML
//! fragments rather than JSON.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use hypertodo_core::TodoError;
use std::fmt;

use crate::views;

/// Application error type for web handlers.
///
/// Wraps domain errors and converts them into HTTP responses via Axum's
/// `IntoResponse`. Validation failures map to 422, missing ids to 404, and
/// backend failures to 500.
///
/// # Examples
///
/// ```ignore
/// async fn handler(State(state): State<AppState>) -> WebResult<Html<String>> {
///     let todo = state.store.toggle(id).await?; // TodoError -> AppError
///     Ok(Html(views::todo_item(&todo)))
/// }
/// ```
#[derive(Debug)]
pub struct AppError {
    /// HTTP status code
    status: StatusCode,
    /// Error message (user-facing)
    message: String,
    /// Internal error (for logging, not exposed to client)
    source: Option<anyhow::Error>,
}

impl AppError {
    /// Create a new application error.
    #[must_use]
    pub const fn new(status: StatusCode, message: String) -> Self {
        Self {
            status,
            message,
            source: None,
        }
    }

    /// Create a new error with a source error.
    #[must_use]
    pub fn with_source(mut self, source: anyhow::Error) -> Self {
        self.source = Some(source);
        self
    }

    /// Create a 400 Bad Request error.
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message.into())
    }

    /// Create a 404 Not Found error.
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message.into())
    }

    /// Create a 422 Unprocessable Entity error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, message.into())
    }

    /// Create a 500 Internal Server Error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message.into())
    }

    /// The HTTP status this error maps to.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.status, self.message)
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log internal errors
        if self.status.is_server_error() {
            if let Some(source) = &self.source {
                tracing::error!(
                    status = %self.status,
                    message = %self.message,
                    error = %source,
                    "Internal server error"
                );
            } else {
                tracing::error!(
                    status = %self.status,
                    message = %self.message,
                    "Internal server error"
                );
            }
        }

        let body = format!(
            "<div class=\"text-red-500\">{}</div>",
            views::escape(&self.message)
        );

        (self.status, Html(body)).into_response()
    }
}

/// Map store errors onto HTTP statuses.
impl From<TodoError> for AppError {
    fn from(err: TodoError) -> Self {
        match err {
            TodoError::Validation(message) => Self::validation(message),
            TodoError::NotFound(id) => Self::not_found(format!("Todo with id {id} not found")),
            TodoError::Storage(message) => {
                Self::internal("An internal error occurred").with_source(anyhow::anyhow!(message))
            }
        }
    }
}
