//! End-to-end HTTP tests over the memory-backed application.
//!
//! These drive the full request → store → view pipeline through the real
//! router, asserting on the returned fragments the way an htmx client would
//! consume them.

#![allow(clippy::expect_used)] // Test code uses expect for clear failure messages

use axum::http::StatusCode;
use axum_test::TestServer;
use hypertodo_core::MemoryStore;
use hypertodo_web::{app, AppState};
use std::sync::Arc;

fn server() -> TestServer {
    server_with(MemoryStore::new())
}

fn server_with(store: MemoryStore) -> TestServer {
    let state = AppState::new(Arc::new(store));
    TestServer::new(app(state)).expect("Failed to start test server")
}

#[tokio::test]
async fn index_serves_the_page_shell() {
    let server = server();

    let response = server.get("/").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.text();
    assert!(body.starts_with("<!DOCTYPE html>"));
    assert!(body.contains("hx-post=\"/clicked\""));
}

#[tokio::test]
async fn clicked_returns_the_todo_trigger_fragment() {
    let server = server();

    let response = server.post("/clicked").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.text();
    // A fragment, not a document
    assert!(!body.contains("<!DOCTYPE html>"));
    assert!(body.contains("hx-get=\"/todos\""));
}

#[tokio::test]
async fn create_returns_an_unchecked_item_and_list_includes_it() {
    let server = server();

    let response = server
        .post("/todos")
        .form(&[("content", "learn testing")])
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let fragment = response.text();
    assert!(fragment.contains("learn testing"));
    assert!(fragment.contains("type=\"checkbox\""));
    assert!(!fragment.contains("checked "));

    let list = server.get("/todos").await;
    assert_eq!(list.status_code(), StatusCode::OK);
    let body = list.text();
    assert!(body.contains("learn testing"));
    assert!(body.contains("<form"));
}

#[tokio::test]
async fn blank_content_is_rejected_without_growing_the_list() {
    let server = server();

    let response = server.post("/todos").form(&[("content", "   ")]).await;

    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.text().contains("cannot be empty"));

    let list = server.get("/todos").await;
    assert!(!list.text().contains("checkbox"));
}

#[tokio::test]
async fn toggle_round_trips_the_checkbox_state() {
    let server = server_with(MemoryStore::seeded([("flip me", false)]));

    let toggled = server.post("/todos/toggle/1").await;
    assert_eq!(toggled.status_code(), StatusCode::OK);
    assert!(toggled.text().contains("<input type=\"checkbox\" checked"));

    let back = server.post("/todos/toggle/1").await;
    assert_eq!(back.status_code(), StatusCode::OK);
    assert!(!back.text().contains("checked "));
}

#[tokio::test]
async fn toggle_of_a_missing_id_is_404() {
    let server = server();

    let response = server.post("/todos/toggle/999").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert!(response.text().contains("not found"));
}

#[tokio::test]
async fn non_numeric_id_is_rejected_before_the_store() {
    let server = server();

    let response = server.post("/todos/toggle/abc").await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let response = server.delete("/todos/abc").await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn delete_returns_an_empty_body_and_is_idempotent() {
    let server = server_with(MemoryStore::seeded([("short lived", false)]));

    let response = server.delete("/todos/1").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response.text().is_empty());

    let list = server.get("/todos").await;
    assert!(!list.text().contains("short lived"));

    // Deleting again still succeeds
    let again = server.delete("/todos/1").await;
    assert_eq!(again.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn list_keeps_insertion_order_across_mutations() {
    let server = server();

    for content in ["first", "second", "third"] {
        server.post("/todos").form(&[("content", content)]).await;
    }
    server.post("/todos/toggle/3").await;
    server.delete("/todos/2").await;

    let body = server.get("/todos").await.text();
    let first = body.find("first").expect("first missing");
    let third = body.find("third").expect("third missing");
    assert!(first < third);
    assert!(!body.contains("second"));
}

#[tokio::test]
async fn health_endpoint_is_live() {
    let server = server();

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.text(), "ok");
}
