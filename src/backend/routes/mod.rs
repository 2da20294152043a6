//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs           - Module exports and documentation
//! ├── router.rs        - Main router creation, file server, fallback
//! ├── api_routes.rs    - Health, users, login and chirps
//! └── admin_routes.rs  - Metrics and reset
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use chirpy::backend::auth::{TokenLifetimePolicy, TokenService};
//! use chirpy::backend::routes::create_router;
//! use chirpy::backend::server::AppState;
//! use chirpy::backend::store::MemoryStore;
//!
//! # fn example() -> Result<(), chirpy::backend::auth::AuthError> {
//! let state = AppState::new(
//!     Arc::new(MemoryStore::new()),
//!     TokenService::new("secret")?,
//!     TokenLifetimePolicy::default(),
//!     "public",
//! );
//! let router = create_router(state);
//! # Ok(())
//! # }
//! ```

/// Main router creation
pub mod router;

/// API routes
pub mod api_routes;

/// Admin routes
pub mod admin_routes;

// Re-export commonly used functions
pub use router::create_router;
