/**
 * Chirp Handlers
 *
 * HTTP handlers for creating, listing and fetching chirps.
 *
 * # Routes
 *
 * - `POST /api/chirps` - Create a chirp (requires authentication)
 * - `GET /api/chirps` - List all chirps, oldest first
 * - `GET /api/chirps/{chirp_id}` - Get one chirp
 */

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::backend::error::BackendError;
use crate::backend::middleware::auth::AuthUser;
use crate::backend::middleware::json::ApiJson;
use crate::backend::store::Store;
use crate::shared::chirp::prepare_chirp_body;
use crate::shared::{Chirp, CreateChirpRequest};

/// Create a chirp
///
/// The author is the subject of the caller's token. The body is checked
/// against the length limit and censored before it is stored.
///
/// # Errors
///
/// * `400 Bad Request` - Malformed request body, or a chirp longer than
///   140 characters
/// * `401 Unauthorized` - Missing or rejected token, or the token's user
///   no longer exists
pub async fn create_chirp(
    State(store): State<Arc<dyn Store>>,
    AuthUser(user): AuthUser,
    ApiJson(request): ApiJson<CreateChirpRequest>,
) -> Result<(StatusCode, Json<Chirp>), BackendError> {
    let body = prepare_chirp_body(&request.body)?;

    let chirp = store.create_chirp(user.user_id, &body).await?;
    tracing::info!(chirp_id = %chirp.id, user_id = %user.user_id, "Chirp created");

    Ok((StatusCode::CREATED, Json(chirp)))
}

/// List all chirps in creation order
pub async fn list_chirps(
    State(store): State<Arc<dyn Store>>,
) -> Result<Json<Vec<Chirp>>, BackendError> {
    let chirps = store.list_chirps().await?;
    tracing::debug!("Listing {} chirps", chirps.len());
    Ok(Json(chirps))
}

/// Get a chirp by ID
///
/// # Errors
///
/// * `400 Bad Request` - `chirp_id` is not a UUID (rejected by `Path`)
/// * `404 Not Found` - No chirp has this ID
pub async fn get_chirp(
    State(store): State<Arc<dyn Store>>,
    Path(chirp_id): Path<Uuid>,
) -> Result<Json<Chirp>, BackendError> {
    store
        .get_chirp(chirp_id)
        .await?
        .map(Json)
        .ok_or_else(|| BackendError::handler(StatusCode::NOT_FOUND, "chirp not found"))
}
