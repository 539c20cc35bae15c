//! `PostgreSQL` todo store for Hypertodo.
//!
//! This crate provides a `TodoStore` implementation backed by a single
//! `todos` table. It relies on the database for id allocation (`BIGSERIAL`)
//! and for per-statement atomicity; no request spans more than one statement,
//! so no explicit transactions are used.
//!
//! # Example
//!
//! ```ignore
//! use hypertodo_postgres::PostgresTodoStore;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = PostgresTodoStore::connect("postgres://localhost/hypertodo").await?;
//!     store.migrate().await?;
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod store;

pub use store::PostgresTodoStore;
