/**
 * Admin Handlers
 */

use axum::{
    extract::State,
    http::{header::CONTENT_TYPE, StatusCode},
    response::{Html, IntoResponse},
};
use std::sync::Arc;

use crate::backend::error::BackendError;
use crate::backend::middleware::metrics::FileServerHits;
use crate::backend::store::Store;

const TEXT_PLAIN: &str = "text/plain; charset=utf-8";

/// Liveness check; always `200 OK`
pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, [(CONTENT_TYPE, TEXT_PLAIN)], "OK")
}

/// Render the file server hit count
pub async fn metrics(State(hits): State<FileServerHits>) -> Html<String> {
    Html(format!(
        "<html>\n<body>\n<h1>Welcome, Chirpy Admin</h1>\n<p>Chirpy has been visited {} times!</p>\n</body>\n</html>",
        hits.get()
    ))
}

/// Delete all users and chirps and zero the hit count
///
/// # Errors
///
/// * `500 Internal Server Error` - The store could not be cleared
pub async fn reset(
    State(store): State<Arc<dyn Store>>,
    State(hits): State<FileServerHits>,
) -> Result<impl IntoResponse, BackendError> {
    store.reset().await?;
    hits.reset();
    tracing::warn!("All users and chirps deleted, hit counter reset");

    Ok((StatusCode::OK, [(CONTENT_TYPE, TEXT_PLAIN)], "Reset OK"))
}

/// Static assets listing
pub async fn assets() -> Html<&'static str> {
    Html("<pre>\n<a href=\"logo.png\">logo.png</a>\n</pre>\n")
}
