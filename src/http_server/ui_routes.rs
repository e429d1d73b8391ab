//! Management UI
//!
//! Serves the single-page browser client. The page talks to the JSON API
//! only; it holds no state the server depends on.

use axum::{response::Html, routing::get, Router};

use super::errors::method_not_allowed;

const INDEX_HTML: &str = include_str!("assets/index.html");

/// Create UI routes
pub fn ui_routes() -> Router {
    Router::new().route("/", get(index_handler).fallback(method_not_allowed))
}

async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}
