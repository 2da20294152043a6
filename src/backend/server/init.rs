/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP server,
 * including store loading, token service creation, and route configuration.
 *
 * # Initialization Process
 *
 * 1. Open the store (PostgreSQL or in-memory)
 * 2. Key the token service with the configured secret
 * 3. Create the application state
 * 4. Create and configure the router
 */

use axum::Router;
use thiserror::Error;

use crate::backend::auth::error::AuthError;
use crate::backend::auth::tokens::TokenService;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_store, ConfigError, ServerConfig};
use crate::backend::server::state::AppState;

/// Errors that prevent the server from starting
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("token service error: {0}")]
    Auth(#[from] AuthError),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Create and configure the Axum application
///
/// # Errors
///
/// * `StartupError::Auth` - The configured secret cannot key a token service
/// * `StartupError::Database` - `DATABASE_URL` is set but unreachable
pub async fn create_app(config: &ServerConfig) -> Result<Router<()>, StartupError> {
    tracing::info!("Initializing Chirpy backend server");

    let store = load_store(config).await?;
    let tokens = TokenService::new(&config.jwt_secret)?;

    let app_state = AppState::new(
        store,
        tokens,
        config.token_lifetime,
        config.static_dir.clone(),
    );

    let app = create_router(app_state);
    tracing::info!(
        static_dir = %config.static_dir.display(),
        default_ttl_secs = config.token_lifetime.default_secs(),
        max_ttl_secs = config.token_lifetime.max_secs(),
        "Router configured"
    );

    Ok(app)
}
