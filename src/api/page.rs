//! The static estimator page served on every non-API path.

use axum::response::Html;

/// The estimator page. Its form calls `GET /api/wage` and renders the
/// wage or the error message.
pub const INDEX_HTML: &str = include_str!("../../static/index.html");

/// Handler for every path other than `/api/wage`.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
