//! Shared Module
//!
//! This module contains the data model types used by the API: chirps and
//! the rules their bodies must follow, plus the errors those rules raise.
//! Nothing here touches HTTP, storage, or authentication.

/// Chirp data structure and body rules
pub mod chirp;

/// Shared error types
pub mod error;

/// Re-export commonly used types for convenience
pub use chirp::{Chirp, CreateChirpRequest, MAX_CHIRP_LENGTH};
pub use error::SharedError;
