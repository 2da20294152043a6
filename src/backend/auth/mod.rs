//! Authentication Module
//!
//! This module holds the authentication core of the server: password
//! hashing and verification, access token issue and validation, and bearer
//! token extraction. It also holds the user model and the HTTP handlers for
//! registration and login.
//!
//! # Architecture
//!
//! - **`error`** - `AuthError` and its `ValidationError` / `TokenError` kinds
//! - **`password`** - bcrypt hashing and verification
//! - **`tokens`** - HS256 token issue and validation, lifetime policy
//! - **`bearer`** - `Authorization: Bearer <token>` extraction
//! - **`users`** - User model and PostgreSQL queries
//! - **`handlers`** - HTTP handlers for registration and login
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── error.rs        - Error taxonomy
//! ├── password.rs     - Password hashing
//! ├── tokens.rs       - Token service and lifetime policy
//! ├── bearer.rs       - Bearer token extraction
//! ├── users.rs        - User model and database operations
//! └── handlers/       - HTTP handlers
//! ```
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt at `bcrypt::DEFAULT_COST` and never
//!   stored or logged in plaintext
//! - Tokens are signed with a shared secret passed to `TokenService::new`
//! - Every verification failure is reported without revealing which check
//!   failed
//!
//! # Example
//!
//! ```rust,no_run
//! use chirpy::backend::auth::{hash_password, verify_password, TokenService};
//! use chrono::Duration;
//! use uuid::Uuid;
//!
//! # fn example() -> Result<(), chirpy::backend::auth::AuthError> {
//! let hash = hash_password("correct horse")?;
//! verify_password("correct horse", &hash)?;
//!
//! let tokens = TokenService::new("server-secret")?;
//! let user_id = Uuid::new_v4();
//! let token = tokens.issue(user_id, Duration::hours(1))?;
//! assert_eq!(tokens.validate(&token)?, user_id);
//! # Ok(())
//! # }
//! ```

/// Error taxonomy
pub mod error;

/// Password hashing and verification
pub mod password;

/// Token issue and validation
pub mod tokens;

/// Bearer token extraction
pub mod bearer;

/// User model and database operations
pub mod users;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types
pub use bearer::{bearer_token, extract_bearer_token};
pub use error::{AuthError, TokenError, ValidationError};
pub use password::{hash_password, verify_password, MAX_PASSWORD_CHARS};
pub use tokens::{Claims, TokenLifetimePolicy, TokenService};
pub use users::User;

pub use handlers::{login, register};
