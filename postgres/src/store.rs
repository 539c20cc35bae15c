//! `TodoStore` implementation over a single `todos` table.

use async_trait::async_trait;
use hypertodo_core::todo::{self, Todo, TodoId};
use hypertodo_core::{TodoError, TodoStore};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

/// `PostgreSQL`-backed todo store.
///
/// Ids come from the table's `BIGSERIAL` primary key, so they are monotonic
/// and never reused even across process restarts. Insertion order is
/// recovered with `ORDER BY id`.
#[derive(Debug, Clone)]
pub struct PostgresTodoStore {
    pool: PgPool,
}

impl PostgresTodoStore {
    /// Creates a store over an existing connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connects to the given database URL and returns a store over a fresh
    /// pool.
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::Storage`] if the connection fails.
    pub async fn connect(url: &str) -> Result<Self, TodoError> {
        let pool = PgPool::connect(url).await.map_err(storage_error)?;
        Ok(Self::new(pool))
    }

    /// Creates the `todos` table if it does not exist.
    ///
    /// Safe to call on every startup.
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::Storage`] if the DDL statement fails.
    pub async fn migrate(&self) -> Result<(), TodoError> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS todos (
                id BIGSERIAL PRIMARY KEY,
                content TEXT NOT NULL,
                completed BOOLEAN NOT NULL DEFAULT FALSE
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(storage_error)?;

        tracing::debug!("todos table ready");
        Ok(())
    }
}

#[async_trait]
impl TodoStore for PostgresTodoStore {
    async fn list(&self) -> Result<Vec<Todo>, TodoError> {
        let rows = sqlx::query("SELECT id, content, completed FROM todos ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(storage_error)?;

        Ok(rows.iter().map(row_to_todo).collect())
    }

    async fn create(&self, content: &str) -> Result<Todo, TodoError> {
        todo::validate_content(content).map_err(TodoError::Validation)?;

        let row = sqlx::query(
            "INSERT INTO todos (content) VALUES ($1) RETURNING id, content, completed",
        )
        .bind(content)
        .fetch_one(&self.pool)
        .await
        .map_err(storage_error)?;

        Ok(row_to_todo(&row))
    }

    async fn toggle(&self, id: TodoId) -> Result<Todo, TodoError> {
        let row = sqlx::query(
            "UPDATE todos SET completed = NOT completed WHERE id = $1 \
             RETURNING id, content, completed",
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(storage_error)?;

        row.as_ref().map(row_to_todo).ok_or(TodoError::NotFound(id))
    }

    async fn delete(&self, id: TodoId) -> Result<bool, TodoError> {
        let result = sqlx::query("DELETE FROM todos WHERE id = $1")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(storage_error)?;

        Ok(result.rows_affected() > 0)
    }
}

fn row_to_todo(row: &PgRow) -> Todo {
    Todo {
        id: TodoId::from_i64(row.get("id")),
        content: row.get("content"),
        completed: row.get("completed"),
    }
}

fn storage_error(err: sqlx::Error) -> TodoError {
    TodoError::Storage(err.to_string())
}
