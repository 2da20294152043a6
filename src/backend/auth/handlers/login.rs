/**
 * Login Handler
 *
 * This module implements the user authentication handler for POST /api/login.
 *
 * # Authentication Process
 *
 * 1. Resolve the requested token lifetime against the lifetime policy
 * 2. Look up user by email
 * 3. Verify password using bcrypt, against a fixed hash when the email
 *    is unknown
 * 4. Issue a token whose subject is the user ID
 * 5. Return the user and the token
 *
 * # Security
 *
 * - An unknown email and a wrong password produce the same 401 response
 * - Passwords and tokens are never logged
 */

use axum::{extract::State, response::Json};
use std::sync::Arc;

use crate::backend::auth::error::AuthError;
use crate::backend::auth::handlers::types::{
    normalize_email, LoginRequest, LoginResponse, UserResponse,
};
use crate::backend::auth::password::{dummy_password_hash, verify_password_blocking};
use crate::backend::auth::tokens::{TokenLifetimePolicy, TokenService};
use crate::backend::error::BackendError;
use crate::backend::middleware::json::ApiJson;
use crate::backend::store::Store;

/// Login handler
///
/// # Arguments
///
/// * `State(store)` - User storage
/// * `State(tokens)` - Token issuer
/// * `State(policy)` - Token lifetime policy
/// * `ApiJson(request)` - Email, password and optional `expires_in_seconds`
///
/// # Errors
///
/// * `400 Bad Request` - Malformed body or negative requested lifetime
/// * `401 Unauthorized` - Unknown email or wrong password
/// * `500 Internal Server Error` - Storage, hashing, or signing failed
pub async fn login(
    State(store): State<Arc<dyn Store>>,
    State(tokens): State<Arc<TokenService>>,
    State(policy): State<TokenLifetimePolicy>,
    ApiJson(request): ApiJson<LoginRequest>,
) -> Result<Json<LoginResponse>, BackendError> {
    let ttl = policy
        .resolve(request.expires_in_seconds)
        .map_err(AuthError::from)?;

    let user = store
        .get_user_by_email(normalize_email(&request.email))
        .await?;

    // Unknown emails still pay for one bcrypt verification
    let password_hash = match &user {
        Some(user) => user.hashed_password.clone(),
        None => dummy_password_hash().to_string(),
    };
    verify_password_blocking(request.password, password_hash).await?;
    let user = user.ok_or(AuthError::Mismatch)?;

    let token = tokens.issue(user.id, ttl)?;
    tracing::info!(user_id = %user.id, ttl_secs = ttl.num_seconds(), "User logged in");

    Ok(Json(LoginResponse {
        user: UserResponse::from(&user),
        token,
    }))
}
