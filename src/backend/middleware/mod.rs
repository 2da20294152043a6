//! Middleware Module
//!
//! This module contains all HTTP middleware for the backend server.
//!
//! # Architecture
//!
//! - **`auth`** - Bearer token authentication for protected routes
//! - **`metrics`** - File server hit counter
//! - **`json`** - JSON body extractor answering with the error envelope
//!
//! # Example
//!
//! ```rust,ignore
//! use axum::middleware::from_fn_with_state;
//! use chirpy::backend::middleware::auth_middleware;
//!
//! let protected = Router::new()
//!     .route("/api/chirps", post(create_chirp))
//!     .route_layer(from_fn_with_state(state.clone(), auth_middleware));
//! ```

pub mod auth;
pub mod json;
pub mod metrics;

pub use auth::{auth_middleware, AuthUser, AuthenticatedUser};
pub use json::ApiJson;
pub use metrics::{track_file_server_hits, FileServerHits};
