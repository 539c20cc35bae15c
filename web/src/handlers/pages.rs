//! Page shell and static fragment handlers.
//!
//! These two routes take no input and touch no state; they only exist to
//! bootstrap the hypermedia flow that ends at the todo list.

use axum::response::Html;

use crate::views;

/// `GET /` — the full page shell wrapping the landing fragment.
#[allow(clippy::unused_async)]
pub async fn index() -> Html<String> {
    Html(views::page(&views::click_me()))
}

/// `POST /clicked` — static fragment with the button that loads the todo
/// list. The client swaps it over the landing button.
#[allow(clippy::unused_async)]
pub async fn clicked() -> Html<String> {
    Html(views::clicked())
}
