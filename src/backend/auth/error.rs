/**
 * Authentication Error Types
 *
 * This module defines the error taxonomy of the authentication core:
 * password hashing, password verification, token issuance, token
 * validation, and bearer token extraction.
 *
 * # Error Categories
 *
 * - `Validation` - An input violates a stated precondition (password too
 *   long, non-positive token lifetime, unusable secret or algorithm)
 * - `Mismatch` - Credential verification failed. Carries no detail about
 *   which check failed.
 * - `Token` - A presented token was rejected (`Malformed`,
 *   `SignatureInvalid`, `Expired`, `InvalidSubject`)
 * - `MissingToken` - No usable bearer token in the `Authorization` header
 * - `Internal` - The hashing library or a blocking task failed
 *
 * # External Messages
 *
 * The detailed kind is available through [`AuthError::kind`] for logging.
 * The HTTP layer collapses every authentication failure into one constant
 * message so clients cannot tell which check rejected them.
 */

use jsonwebtoken::errors::{Error as JwtError, ErrorKind};
use jsonwebtoken::Algorithm;
use thiserror::Error;

/// Input rejected before any cryptographic work was done
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Password exceeds the accepted length
    #[error("password cannot have more than {max} characters")]
    PasswordTooLong {
        /// Maximum number of characters accepted
        max: usize,
    },

    /// Token lifetime of zero or less
    #[error("token lifetime must be greater than zero")]
    NonPositiveTtl,

    /// Token lifetime that cannot be represented as a timestamp
    #[error("token lifetime is out of range")]
    TtlOutOfRange,

    /// Shared secret is empty
    #[error("token secret must not be empty")]
    EmptySecret,

    /// Signing algorithm that cannot be keyed by a shared secret
    #[error("algorithm {0:?} cannot be used with a shared secret")]
    UnsupportedAlgorithm(Algorithm),
}

/// Reasons a presented token is rejected
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    /// The token cannot be parsed or its claim set is not acceptable
    #[error("token is malformed")]
    Malformed,

    /// The signature does not verify with the configured secret
    #[error("token signature is invalid")]
    SignatureInvalid,

    /// The token is past its expiry time
    #[error("token has expired")]
    Expired,

    /// The subject claim is not a valid user identifier
    #[error("token subject is not a valid user id")]
    InvalidSubject,
}

impl From<&JwtError> for TokenError {
    fn from(err: &JwtError) -> Self {
        match err.kind() {
            ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => Self::SignatureInvalid,
            ErrorKind::ExpiredSignature => Self::Expired,
            _ => Self::Malformed,
        }
    }
}

impl From<JwtError> for TokenError {
    fn from(err: JwtError) -> Self {
        Self::from(&err)
    }
}

/// Errors produced by the authentication core
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Input shape or size violates a precondition
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Password does not match the stored hash
    #[error("credentials do not match")]
    Mismatch,

    /// Presented token was rejected
    #[error(transparent)]
    Token(#[from] TokenError),

    /// No bearer token present
    #[error("no bearer token in authorization header")]
    MissingToken,

    /// Hashing library or worker task failure
    #[error("internal authentication error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Stable, detailed name of this error for logs
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(ValidationError::PasswordTooLong { .. }) => "password_too_long",
            Self::Validation(ValidationError::NonPositiveTtl) => "non_positive_ttl",
            Self::Validation(ValidationError::TtlOutOfRange) => "ttl_out_of_range",
            Self::Validation(ValidationError::EmptySecret) => "empty_secret",
            Self::Validation(ValidationError::UnsupportedAlgorithm(_)) => "unsupported_algorithm",
            Self::Mismatch => "credential_mismatch",
            Self::Token(TokenError::Malformed) => "token_malformed",
            Self::Token(TokenError::SignatureInvalid) => "token_signature_invalid",
            Self::Token(TokenError::Expired) => "token_expired",
            Self::Token(TokenError::InvalidSubject) => "token_invalid_subject",
            Self::MissingToken => "token_missing",
            Self::Internal(_) => "internal",
        }
    }

    /// Whether this error means the caller failed to authenticate
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Mismatch | Self::Token(_) | Self::MissingToken)
    }
}
