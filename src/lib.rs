//! Chirpy - Main Library
//!
//! Chirpy is a small multi-user message board backend. Users register with
//! an email and password, log in to receive a signed access token, and use
//! that token to post short messages ("chirps") that anyone can list or
//! fetch.
//!
//! # Module Structure
//!
//! - **`shared`** - The chirp model and its body rules
//!
//! - **`backend`** - Server-side code
//!   - Authentication core: bcrypt passwords, HS256 tokens, bearer headers
//!   - Axum HTTP server, handlers and middleware
//!   - PostgreSQL and in-memory storage
//!
//! # Usage
//!
//! ```rust,no_run
//! use chirpy::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `backend::auth::AuthError` for the authentication core
//! - `backend::store::StoreError` for storage
//! - `shared::SharedError` for model validation
//! - `backend::BackendError` for HTTP handlers, converted into JSON error
//!   responses

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
