//! Hypertodo server binary.
//!
//! Startup: initialize tracing, pick a store (PostgreSQL when `DATABASE_URL`
//! is set, in-memory otherwise), bind, serve.
//!
//! # Environment
//!
//! - `BIND_ADDR` — listen address, default `0.0.0.0:4000`
//! - `DATABASE_URL` — when set, todos live in PostgreSQL; the schema is
//!   created on startup if missing

use anyhow::Context;
use hypertodo_core::{MemoryStore, TodoStore};
use hypertodo_postgres::PostgresTodoStore;
use hypertodo_web::{app, AppState};
use std::sync::Arc;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Set up tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let store: Arc<dyn TodoStore> = match std::env::var("DATABASE_URL") {
        Ok(url) => {
            let store = PostgresTodoStore::connect(&url)
                .await
                .context("connecting to DATABASE_URL")?;
            store.migrate().await.context("creating todos table")?;
            tracing::info!("using PostgreSQL store");
            Arc::new(store)
        }
        Err(_) => {
            tracing::info!("DATABASE_URL not set, using in-memory store");
            Arc::new(MemoryStore::seeded([
                ("learn the beth stack", true),
                ("learn vim", false),
            ]))
        }
    };

    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:4000".to_string());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;

    tracing::info!(%addr, "hypertodo listening");
    axum::serve(listener, app(AppState::new(store)))
        .await
        .context("server error")?;

    Ok(())
}
