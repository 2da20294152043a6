/**
 * File Server Hit Counter
 *
 * Counts requests served under `/app`. The count is shown by
 * `GET /admin/metrics` and zeroed by `POST /admin/reset`.
 */

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Shared counter of file server requests
#[derive(Clone, Debug, Default)]
pub struct FileServerHits(Arc<AtomicU64>);

impl FileServerHits {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current number of hits
    pub fn get(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }

    pub fn increment(&self) {
        self.0.fetch_add(1, Ordering::Relaxed);
    }

    pub fn reset(&self) {
        self.0.store(0, Ordering::Relaxed);
    }
}

/// Middleware counting every request that passes through it
pub async fn track_file_server_hits(
    State(hits): State<FileServerHits>,
    request: Request,
    next: Next,
) -> Response {
    hits.increment();
    next.run(request).await
}
