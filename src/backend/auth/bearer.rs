/**
 * Bearer Token Extraction
 *
 * Parses `Authorization: Bearer <token>` header values. Every malformed
 * shape is rejected with `AuthError::MissingToken`; none of them panic.
 */

use axum::http::{header::AUTHORIZATION, HeaderMap};

use crate::backend::auth::error::AuthError;

const BEARER_SCHEME: &str = "Bearer";

/// Extract the token from an `Authorization` header value
///
/// # Arguments
/// * `header` - Raw header value, or `None` if the header is absent
///
/// # Errors
/// `AuthError::MissingToken` if the header is absent or empty, uses a
/// scheme other than `Bearer`, or does not have exactly one token after
/// the scheme.
pub fn extract_bearer_token(header: Option<&str>) -> Result<&str, AuthError> {
    let value = header
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or(AuthError::MissingToken)?;

    let mut parts = value.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(scheme), Some(token), None) if scheme.eq_ignore_ascii_case(BEARER_SCHEME) => {
            Ok(token)
        }
        _ => Err(AuthError::MissingToken),
    }
}

/// Extract the bearer token from request headers
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let header = match headers.get(AUTHORIZATION) {
        Some(value) => Some(value.to_str().map_err(|_| AuthError::MissingToken)?),
        None => None,
    };
    extract_bearer_token(header)
}
