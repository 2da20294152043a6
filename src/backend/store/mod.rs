//! Storage Module
//!
//! This module defines the [`Store`] trait the HTTP handlers persist users
//! and chirps through, and its two implementations.
//!
//! # Implementations
//!
//! - **`PgStore`** - PostgreSQL via sqlx, used when `DATABASE_URL` is set
//! - **`MemoryStore`** - In-process maps, used when no database is
//!   configured and in tests
//!
//! The authentication core never touches storage. It only produces the
//! password hash the store keeps and consumes the hash the store returns.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::backend::auth::users::User;
use crate::shared::Chirp;

/// In-memory store
pub mod memory;

/// PostgreSQL store
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Storage errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// A unique value is already taken
    #[error("{0} already exists")]
    Conflict(&'static str),

    /// A chirp references a user that does not exist
    #[error("user {0} does not exist")]
    UnknownUser(Uuid),

    /// Database failure
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Persistence operations used by the HTTP layer
#[async_trait]
pub trait Store: Send + Sync {
    /// Create a user; fails with `StoreError::Conflict` if the email is taken
    async fn create_user(&self, email: &str, hashed_password: &str) -> Result<User, StoreError>;

    /// Look a user up by email
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Create a chirp owned by `user_id`
    async fn create_chirp(&self, user_id: Uuid, body: &str) -> Result<Chirp, StoreError>;

    /// All chirps, oldest first
    async fn list_chirps(&self) -> Result<Vec<Chirp>, StoreError>;

    /// Look a chirp up by ID
    async fn get_chirp(&self, id: Uuid) -> Result<Option<Chirp>, StoreError>;

    /// Delete all users and chirps
    async fn reset(&self) -> Result<(), StoreError>;
}
