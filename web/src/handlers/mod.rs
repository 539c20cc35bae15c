//! HTTP request handlers.
//!
//! This module contains all HTTP handlers organized by concern: `todos` for
//! the CRUD routes, `pages` for the page shell and static fragments, and
//! `health` for liveness.

pub mod health;
pub mod pages;
pub mod todos;
