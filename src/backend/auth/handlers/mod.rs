//! Authentication Handlers Module
//!
//! This module contains the HTTP handlers for user registration and login.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Request and response types
//! ├── signup.rs   - User registration handler
//! └── login.rs    - User authentication handler
//! ```
//!
//! # Handlers
//!
//! - **`register`** - POST /api/users - User registration
//! - **`login`** - POST /api/login - User authentication
//!
//! # Authentication Flow
//!
//! 1. **Register**: email and password → password hashed → user stored
//! 2. **Login**: email and password → hash verified → token issued
//! 3. **Protected routes**: `Authorization: Bearer <token>` → token
//!    validated by `auth_middleware` → user ID available to the handler

/// Request and response types
pub mod types;

/// Registration handler
pub mod signup;

/// Login handler
pub mod login;

// Re-export commonly used types
pub use types::{CreateUserRequest, LoginRequest, LoginResponse, UserResponse};

// Re-export handlers
pub use login::login;
pub use signup::register;
