/**
 * Chirp Data Structure
 *
 * This module defines the Chirp struct, the short text message users post,
 * along with the body rules applied before a chirp is stored.
 *
 * # Body Rules
 *
 * - At most 140 characters
 * - The words `kerfuffle`, `sharbert` and `fornax` are replaced with
 *   `****`, compared case-insensitively on space-separated words
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::SharedError;

/// Maximum number of characters in a chirp body
pub const MAX_CHIRP_LENGTH: usize = 140;

const PROFANE_WORDS: [&str; 3] = ["kerfuffle", "sharbert", "fornax"];

const CENSORED: &str = "****";

/// A single chirp as stored and returned by the API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Chirp {
    /// Unique chirp ID
    pub id: Uuid,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
    /// The chirp text
    pub body: String,
    /// Author's user ID
    pub user_id: Uuid,
}

impl Chirp {
    /// Create a new chirp with the current timestamp
    pub fn new(body: impl Into<String>, user_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            body: body.into(),
            user_id,
        }
    }
}

/// Request body for posting a chirp
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateChirpRequest {
    /// The chirp text
    pub body: String,
}

/// Check a chirp body and return the censored text to store
///
/// # Errors
/// `SharedError::ValidationError` on field `body` if the body is longer
/// than [`MAX_CHIRP_LENGTH`] characters.
pub fn prepare_chirp_body(body: &str) -> Result<String, SharedError> {
    if body.chars().count() > MAX_CHIRP_LENGTH {
        return Err(SharedError::validation("body", "Chirp is too long"));
    }
    Ok(clean_profanity(body))
}

/// Replace profane words with `****`
pub fn clean_profanity(body: &str) -> String {
    body.split(' ')
        .map(|word| {
            if PROFANE_WORDS.iter().any(|p| word.eq_ignore_ascii_case(p)) {
                CENSORED
            } else {
                word
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
