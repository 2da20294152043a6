/**
 * Authentication Handler Types
 *
 * This module defines the request and response types used by the user
 * registration and login handlers. Request types carry plaintext passwords
 * and deliberately do not implement `Debug`.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::backend::auth::users::User;

/// Canonical form of an email address, shared by registration and login
pub fn normalize_email(email: &str) -> &str {
    email.trim()
}

/// Registration request
#[derive(Deserialize, Serialize)]
pub struct CreateUserRequest {
    /// User's email address
    pub email: String,
    /// User's password (will be hashed before storage)
    pub password: String,
}

/// Login request
#[derive(Deserialize, Serialize)]
pub struct LoginRequest {
    /// User's email address
    pub email: String,
    /// User's password (will be verified against stored hash)
    pub password: String,
    /// Requested token lifetime in seconds; absent or 0 means the default
    #[serde(default)]
    pub expires_in_seconds: Option<i64>,
}

/// User response (without the password hash)
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UserResponse {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub email: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            created_at: user.created_at,
            updated_at: user.updated_at,
            email: user.email.clone(),
        }
    }
}

/// Login response: the user's fields plus the issued token
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LoginResponse {
    #[serde(flatten)]
    pub user: UserResponse,
    /// Signed access token
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_response_omits_hash() {
        let user = User::new("test@example.com", "$2b$12$secret-hash");
        let json = serde_json::to_value(UserResponse::from(&user)).unwrap();

        assert_eq!(json["email"], "test@example.com");
        assert_eq!(json["id"], user.id.to_string());
        assert!(json.get("hashed_password").is_none());
    }

    #[test]
    fn test_login_response_is_flat() {
        let user = User::new("test@example.com", "hash");
        let response = LoginResponse {
            user: UserResponse::from(&user),
            token: "abc.def.ghi".to_string(),
        };
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["token"], "abc.def.ghi");
        assert_eq!(json["email"], "test@example.com");
        assert!(json.get("user").is_none());
    }

    #[test]
    fn test_normalize_email_trims() {
        assert_eq!(normalize_email("  a@b.c \n"), "a@b.c");
        assert_eq!(normalize_email("a@b.c"), "a@b.c");
    }

    #[test]
    fn test_login_request_lifetime_optional() {
        let request: LoginRequest =
            serde_json::from_str(r#"{"email":"a@b.c","password":"pw"}"#).unwrap();
        assert_eq!(request.expires_in_seconds, None);

        let request: LoginRequest =
            serde_json::from_str(r#"{"email":"a@b.c","password":"pw","expires_in_seconds":60}"#)
                .unwrap();
        assert_eq!(request.expires_in_seconds, Some(60));
    }
}
