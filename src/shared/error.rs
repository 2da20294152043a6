//! Shared Error Types
//!
//! This module defines error types for the shared data model. These errors
//! represent input that violates a rule of the model itself, independent of
//! storage or transport.
//!
//! # Usage
//!
//! ```rust
//! use chirpy::shared::error::SharedError;
//!
//! let error = SharedError::validation("body", "Chirp is too long");
//! ```
use thiserror::Error;

/// Shared error types
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Message suitable for API clients
    pub fn client_message(&self) -> &str {
        match self {
            Self::ValidationError { message, .. } => message,
        }
    }
}
