/**
 * Admin Route Configuration
 *
 * - `GET /admin/metrics` - File server hit count
 * - `POST /admin/reset` - Delete all users and chirps, zero the hit count
 */

use axum::{
    routing::{get, post},
    Router,
};

use crate::backend::admin::{metrics, reset};
use crate::backend::server::state::AppState;

/// Configure admin routes
pub fn configure_admin_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/admin/metrics", get(metrics))
        .route("/admin/reset", post(reset))
}
