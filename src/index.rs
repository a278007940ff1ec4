use axum::response::Html;
use tracing::instrument;

use crate::{include_res, res::page};

/// HTTP handler for the home page
///
/// GET /
#[instrument(name = "index")]
pub async fn index() -> Html<String> {
    page("Chat", include_res!(str, "/pages/index.html"))
}
