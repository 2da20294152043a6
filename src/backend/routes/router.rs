/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Route Order
 *
 * 1. API routes (health, users, login, chirps)
 * 2. Admin routes (metrics, reset)
 * 3. File server under `/app`, counted by the hit counter
 * 4. Fallback handler (404)
 */

use axum::{
    http::StatusCode,
    middleware::from_fn_with_state,
    routing::{get, get_service},
    Router,
};
use tower_http::services::{ServeDir, ServeFile};

use crate::backend::admin::assets;
use crate::backend::middleware::metrics::track_file_server_hits;
use crate::backend::routes::admin_routes::configure_admin_routes;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state containing the store and token service
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
///
/// # File Server
///
/// Requests under `/app` are served from `app_state.static_dir` with the
/// `/app` prefix stripped. `GET /app/assets` answers with a fixed listing.
/// Every request under `/app` increments the file server hit counter.
///
/// `nest` does not match `/app/` itself, so that path gets its own route
/// serving `index.html` behind the same counter.
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new();

    // Add API routes
    let router = configure_api_routes(router, &app_state);

    // Add admin routes
    let router = configure_admin_routes(router);

    // Add the counted file server
    let file_server: Router<AppState> = Router::new()
        .route("/assets", get(assets))
        .fallback_service(ServeDir::new(&app_state.static_dir))
        .layer(from_fn_with_state(
            app_state.file_server_hits.clone(),
            track_file_server_hits,
        ));
    let app_index = get_service(ServeFile::new(app_state.static_dir.join("index.html")))
        .route_layer(from_fn_with_state(
            app_state.file_server_hits.clone(),
            track_file_server_hits,
        ));
    let router = router
        .nest("/app", file_server)
        .route("/app/", app_index);

    // Fallback handler for 404
    let router = router.fallback(|| async { (StatusCode::NOT_FOUND, "404 Not Found") });

    router.with_state(app_state)
}
