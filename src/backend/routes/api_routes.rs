/**
 * API Route Configuration
 *
 * # Routes
 *
 * ## Health
 * - `GET /api/healthz` - Liveness check
 *
 * ## Authentication
 * - `POST /api/users` - User registration
 * - `POST /api/login` - User login, returns an access token
 *
 * ## Chirps
 * - `GET /api/chirps` - List chirps
 * - `POST /api/chirps` - Create a chirp (requires authentication)
 * - `GET /api/chirps/{chirp_id}` - Get one chirp
 */

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};

use crate::backend::admin::healthz;
use crate::backend::auth::{login, register};
use crate::backend::chirps::{create_chirp, get_chirp, list_chirps};
use crate::backend::middleware::auth::auth_middleware;
use crate::backend::server::state::AppState;

/// Configure API routes
///
/// `POST /api/chirps` runs behind `auth_middleware`, which rejects the
/// request with 401 before the handler runs when the bearer token is
/// missing or invalid. Every other API route is public.
///
/// # Arguments
///
/// * `router` - The router to add routes to
/// * `app_state` - Supplies the token service for the auth middleware
pub fn configure_api_routes(router: Router<AppState>, app_state: &AppState) -> Router<AppState> {
    let require_auth = from_fn_with_state(app_state.tokens.clone(), auth_middleware);

    router
        .route("/api/healthz", get(healthz))
        // Authentication endpoints
        .route("/api/users", post(register))
        .route("/api/login", post(login))
        // Chirp endpoints
        .route(
            "/api/chirps",
            get(list_chirps).merge(post(create_chirp).route_layer(require_auth)),
        )
        .route("/api/chirps/{chirp_id}", get(get_chirp))
}
