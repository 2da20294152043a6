//! Chirps Module
//!
//! Chirps are short public messages, at most 140 characters, posted by an
//! authenticated user and readable by anyone.
//!
//! - **`handlers`** - HTTP handlers for `/api/chirps`
//! - **`db`** - PostgreSQL queries used by `PgStore`
//!
//! The chirp model and its body rules live in `shared::chirp`.

/// Database operations
pub mod db;

/// HTTP handlers
pub mod handlers;

pub use handlers::{create_chirp, get_chirp, list_chirps};
