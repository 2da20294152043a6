//! Backend Module
//!
//! This module contains all server-side code for Chirpy: the authentication
//! core, the storage layer, the HTTP handlers and the Axum server around
//! them.
//!
//! # Architecture
//!
//! - **`auth`** - Password hashing, access tokens, bearer extraction, users
//! - **`chirps`** - Chirp handlers and database queries
//! - **`admin`** - Health check, metrics, reset, assets listing
//! - **`store`** - `Store` trait with PostgreSQL and in-memory backends
//! - **`middleware`** - Authentication and file server hit counting
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`server`** - Configuration, application state, initialization
//! - **`error`** - `BackendError` and its HTTP response conversion
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── auth/           - Authentication
//! ├── chirps/         - Chirps
//! ├── admin/          - Operational endpoints
//! ├── store/          - Persistence
//! ├── middleware/     - Request middleware
//! ├── routes/         - Route configuration
//! ├── server/         - Server initialization and state
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! Handlers share an `AppState` holding the store as `Arc<dyn Store>`, the
//! token service as `Arc<TokenService>`, the token lifetime policy and the
//! hit counter. The token service is read-only after startup.

/// Authentication and user management
pub mod auth;

/// Chirp handlers and queries
pub mod chirps;

/// Operational endpoints
pub mod admin;

/// Persistence
pub mod store;

/// Middleware for request processing
pub mod middleware;

/// Route configuration
pub mod routes;

/// Server setup and configuration
pub mod server;

/// Backend error types
pub mod error;

/// Re-export commonly used types
pub use error::BackendError;
pub use server::create_app;
