/**
 * Password Hashing and Verification
 *
 * This module hashes plaintext passwords for storage and verifies
 * plaintext passwords against stored hashes.
 *
 * # Hash Format
 *
 * Hashes are bcrypt strings (`$2b$<cost>$<salt+digest>`). They encode the
 * algorithm, cost and salt, so verification needs no other parameters.
 *
 * # Cost
 *
 * Hashing uses `bcrypt::DEFAULT_COST`. Each call takes a noticeable
 * amount of CPU time. Async callers should use [`hash_password_blocking`]
 * and [`verify_password_blocking`], which run on tokio's blocking pool.
 */

use bcrypt::{hash, verify, DEFAULT_COST};
use std::sync::OnceLock;

use crate::backend::auth::error::{AuthError, ValidationError};

/// Maximum number of characters accepted in a password
pub const MAX_PASSWORD_CHARS: usize = 36;

/// bcrypt ignores input past this many bytes
const BCRYPT_MAX_INPUT_BYTES: usize = 72;

/// Hash a password for storage
///
/// # Arguments
/// * `plain` - Plaintext password
///
/// # Returns
/// A salted bcrypt hash. Hashing the same password twice yields two
/// different strings.
///
/// # Errors
/// * `ValidationError::PasswordTooLong` - More than 36 characters, or more
///   bytes than bcrypt can take without truncating
/// * `AuthError::Internal` - bcrypt failed
pub fn hash_password(plain: &str) -> Result<String, AuthError> {
    if plain.chars().count() > MAX_PASSWORD_CHARS || plain.len() > BCRYPT_MAX_INPUT_BYTES {
        return Err(ValidationError::PasswordTooLong {
            max: MAX_PASSWORD_CHARS,
        }
        .into());
    }

    hash(plain, DEFAULT_COST).map_err(|e| {
        tracing::error!("Failed to hash password: {:?}", e);
        AuthError::Internal("password hashing failed".to_string())
    })
}

/// Verify a password against a stored hash
///
/// Wrong passwords, empty or corrupt hashes, and non-bcrypt hashes all
/// produce the same `AuthError::Mismatch`.
pub fn verify_password(plain: &str, password_hash: &str) -> Result<(), AuthError> {
    match verify(plain, password_hash) {
        Ok(true) => Ok(()),
        Ok(false) | Err(_) => Err(AuthError::Mismatch),
    }
}

/// A bcrypt hash at the default cost that no account uses
///
/// Login verifies against it when the email is unknown, so both failures
/// cost one bcrypt verification. Computed once on first use.
pub fn dummy_password_hash() -> &'static str {
    static DUMMY_HASH: OnceLock<String> = OnceLock::new();
    DUMMY_HASH.get_or_init(|| {
        hash("chirpy-unknown-user", DEFAULT_COST).unwrap_or_else(|e| {
            tracing::error!("Failed to compute dummy password hash: {:?}", e);
            String::new()
        })
    })
}

/// Run [`hash_password`] on the blocking thread pool
pub async fn hash_password_blocking(plain: String) -> Result<String, AuthError> {
    tokio::task::spawn_blocking(move || hash_password(&plain))
        .await
        .map_err(|e| {
            tracing::error!("Password hashing task failed: {:?}", e);
            AuthError::Internal("password hashing task failed".to_string())
        })?
}

/// Run [`verify_password`] on the blocking thread pool
pub async fn verify_password_blocking(
    plain: String,
    password_hash: String,
) -> Result<(), AuthError> {
    tokio::task::spawn_blocking(move || verify_password(&plain, &password_hash))
        .await
        .map_err(|e| {
            tracing::error!("Password verification task failed: {:?}", e);
            AuthError::Internal("password verification task failed".to_string())
        })?
}
