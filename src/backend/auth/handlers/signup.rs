/**
 * Registration Handler
 *
 * This module implements the user registration handler for POST /api/users.
 *
 * # Registration Process
 *
 * 1. Check the email has an `@`
 * 2. Hash the password with bcrypt on the blocking pool
 * 3. Store the user
 * 4. Return the user without its hash
 */

use axum::{extract::State, http::StatusCode, response::Json};
use std::sync::Arc;

use crate::backend::auth::handlers::types::{normalize_email, CreateUserRequest, UserResponse};
use crate::backend::auth::password::hash_password_blocking;
use crate::backend::error::BackendError;
use crate::backend::middleware::json::ApiJson;
use crate::backend::store::Store;

/// Registration handler
///
/// # Returns
///
/// `201 Created` with the new user
///
/// # Errors
///
/// * `400 Bad Request` - Malformed body, email has no `@`, or password
///   is too long
/// * `409 Conflict` - Email is already registered
/// * `500 Internal Server Error` - Hashing or storage failed
pub async fn register(
    State(store): State<Arc<dyn Store>>,
    ApiJson(request): ApiJson<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), BackendError> {
    let email = normalize_email(&request.email);
    if !email.contains('@') {
        tracing::warn!("Registration rejected: invalid email");
        return Err(BackendError::handler(
            StatusCode::BAD_REQUEST,
            "Invalid email address",
        ));
    }

    let hashed_password = hash_password_blocking(request.password).await?;

    let user = store.create_user(email, &hashed_password).await?;
    tracing::info!(user_id = %user.id, "User registered");

    Ok((StatusCode::CREATED, Json(UserResponse::from(&user))))
}
