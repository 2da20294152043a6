/**
 * JSON Body Extractor
 *
 * Wraps `axum::Json` so that a missing content type, unparseable JSON,
 * or a body of the wrong shape answers with the backend's JSON error
 * envelope instead of axum's plain-text rejection.
 */

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    Json,
};
use serde::de::DeserializeOwned;

use crate::backend::error::BackendError;

/// Message returned for every rejected request body
pub const INVALID_BODY_MESSAGE: &str = "Invalid request body";

/// Axum extractor for JSON request bodies
///
/// Every rejection becomes `400 Bad Request` with
/// `{"error": "Invalid request body"}`. The deserializer's detail is
/// not sent to the client.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ApiJson(value)),
            Err(rejection) => {
                // The rejection text can quote field values, so only its kind is logged
                let kind = match &rejection {
                    JsonRejection::MissingJsonContentType(_) => "missing_content_type",
                    JsonRejection::JsonSyntaxError(_) => "syntax",
                    JsonRejection::JsonDataError(_) => "data",
                    _ => "other",
                };
                tracing::warn!(kind, status = %rejection.status(), "Request body rejected");
                Err(BackendError::handler(
                    StatusCode::BAD_REQUEST,
                    INVALID_BODY_MESSAGE,
                ))
            }
        }
    }
}
