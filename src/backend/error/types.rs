/**
 * Backend Error Types
 *
 * This module defines error types specific to the backend server.
 * These errors are used in HTTP handlers and can be converted to HTTP responses.
 *
 * # Error Types
 *
 * - `HandlerError` - Errors raised directly by an HTTP handler
 * - `Auth` - Errors from the authentication core
 * - `Store` - Errors from the storage layer
 * - `SharedError` - Model validation errors (chirp body rules)
 *
 * # External Messages
 *
 * Authentication failures all answer with a constant message. Internal
 * failures answer with "Something went wrong". The detailed cause only
 * reaches the logs.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::auth::error::{AuthError, ValidationError};
use crate::backend::store::StoreError;
use crate::shared::SharedError;

/// Message returned for login failures, whichever check failed
pub const LOGIN_FAILED_MESSAGE: &str = "Incorrect email or password";

/// Message returned for rejected or missing bearer tokens
pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized";

/// Message returned for internal failures
pub const INTERNAL_MESSAGE: &str = "Something went wrong";

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use axum::http::StatusCode;
/// use chirpy::backend::error::BackendError;
///
/// let err = BackendError::handler(StatusCode::NOT_FOUND, "chirp not found");
/// assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Handler error (e.g., invalid input, missing resource)
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// Authentication error
    #[error("Authentication error: {0}")]
    Auth(#[from] AuthError),

    /// Storage error
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    /// Shared error (from shared module)
    #[error(transparent)]
    SharedError(#[from] SharedError),
}

impl BackendError {
    /// Create a new handler error with a status code
    ///
    /// # Arguments
    ///
    /// * `status` - HTTP status code
    /// * `message` - Error message
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `HandlerError` - Uses the status code from the error
    /// - `Auth` - 401 for authentication failures, 400 for rejected input,
    ///   500 for misconfiguration and internal failures
    /// - `Store` - 409 for conflicts, 401 for tokens naming a deleted user,
    ///   500 for database failures
    /// - `SharedError` - 400 Bad Request
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HandlerError { status, .. } => *status,
            Self::Auth(err) if err.is_unauthorized() => StatusCode::UNAUTHORIZED,
            Self::Auth(AuthError::Validation(
                ValidationError::PasswordTooLong { .. }
                | ValidationError::NonPositiveTtl
                | ValidationError::TtlOutOfRange,
            )) => StatusCode::BAD_REQUEST,
            Self::Auth(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Store(StoreError::Conflict(_)) => StatusCode::CONFLICT,
            Self::Store(StoreError::UnknownUser(_)) => StatusCode::UNAUTHORIZED,
            Self::Store(StoreError::Database(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::SharedError(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Get the message sent to the client
    pub fn message(&self) -> String {
        match self {
            Self::HandlerError { message, .. } => message.clone(),
            Self::Auth(AuthError::Mismatch) => LOGIN_FAILED_MESSAGE.to_string(),
            Self::Auth(err) if err.is_unauthorized() => UNAUTHORIZED_MESSAGE.to_string(),
            Self::Auth(AuthError::Validation(err))
                if self.status_code() == StatusCode::BAD_REQUEST =>
            {
                capitalize(&err.to_string())
            }
            Self::Auth(_) => INTERNAL_MESSAGE.to_string(),
            Self::Store(StoreError::Conflict(what)) => format!("{} already exists", what),
            Self::Store(StoreError::UnknownUser(_)) => UNAUTHORIZED_MESSAGE.to_string(),
            Self::Store(StoreError::Database(_)) => INTERNAL_MESSAGE.to_string(),
            Self::SharedError(err) => err.client_message().to_string(),
        }
    }

    /// Stable name of the underlying cause, for logs
    pub fn kind(&self) -> &'static str {
        match self {
            Self::HandlerError { .. } => "handler",
            Self::Auth(err) => err.kind(),
            Self::Store(StoreError::Conflict(_)) => "store_conflict",
            Self::Store(StoreError::UnknownUser(_)) => "store_unknown_user",
            Self::Store(StoreError::Database(_)) => "store_database",
            Self::SharedError(_) => "validation",
        }
    }
}

fn capitalize(message: &str) -> String {
    let mut chars = message.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
