//! Axum route handlers for the static views.

use axum::response::Html;

use crate::pages::about::render_about;
use crate::pages::home::render_home;

/// GET /
pub async fn handle_home() -> Html<String> {
    Html(render_home())
}

/// GET /about
pub async fn handle_about() -> Html<String> {
    Html(render_about())
}
