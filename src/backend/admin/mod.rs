//! Admin Module
//!
//! Operational endpoints: health check, file server metrics, reset, and
//! the static assets listing.
//!
//! - `GET /api/healthz` - Liveness check
//! - `GET /admin/metrics` - File server hit count as HTML
//! - `POST /admin/reset` - Delete all users and chirps, zero the hit count
//! - `GET /app/assets` - Assets listing

/// HTTP handlers
pub mod handlers;

pub use handlers::{assets, healthz, metrics, reset};
