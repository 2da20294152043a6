//! Common test utilities and helpers
//!
//! Builds the full router over the in-memory store and drives it with
//! `tower::ServiceExt::oneshot`, so no socket or database is needed.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use std::path::Path;
use std::sync::Arc;
use tower::ServiceExt;
use uuid::Uuid;

use chirpy::backend::auth::{TokenLifetimePolicy, TokenService};
use chirpy::backend::routes::create_router;
use chirpy::backend::server::AppState;
use chirpy::backend::store::{MemoryStore, Store};

pub const TEST_SECRET: &str = "integration-test-secret";

/// Router plus handles on the state behind it
pub struct TestApp {
    pub router: Router,
    pub state: AppState,
}

/// Collected response
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap_or_else(|e| {
            panic!("response body is not JSON ({}): {}", e, self.text())
        })
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Test user credentials
pub struct TestUser {
    pub id: Uuid,
    pub email: String,
    pub password: String,
    pub token: String,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_static_dir(".")
    }

    pub fn with_static_dir(static_dir: impl AsRef<Path>) -> Self {
        Self::with_policy(static_dir, TokenLifetimePolicy::default())
    }

    pub fn with_policy(static_dir: impl AsRef<Path>, policy: TokenLifetimePolicy) -> Self {
        let store: Arc<dyn Store> = Arc::new(MemoryStore::new());
        let tokens = TokenService::new(TEST_SECRET).unwrap();
        let state = AppState::new(store, tokens, policy, static_dir.as_ref());
        Self {
            router: create_router(state.clone()),
            state,
        }
    }

    pub fn tokens(&self) -> &TokenService {
        &self.state.tokens
    }

    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
        bearer: Option<&str>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = bearer {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        self.send(request).await
    }

    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec();
        TestResponse {
            status,
            headers,
            body,
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.request(Method::GET, uri, None, None).await
    }

    pub async fn post_json(&self, uri: &str, body: Value) -> TestResponse {
        self.request(Method::POST, uri, Some(body), None).await
    }

    pub async fn register(&self, email: &str, password: &str) -> TestResponse {
        self.post_json(
            "/api/users",
            serde_json::json!({ "email": email, "password": password }),
        )
        .await
    }

    pub async fn login(&self, email: &str, password: &str) -> TestResponse {
        self.post_json(
            "/api/login",
            serde_json::json!({ "email": email, "password": password }),
        )
        .await
    }

    /// Register and log in a user
    pub async fn create_test_user(&self, email: &str, password: &str) -> TestUser {
        let registered = self.register(email, password).await;
        assert_eq!(registered.status, StatusCode::CREATED, "{}", registered.text());

        let logged_in = self.login(email, password).await;
        assert_eq!(logged_in.status, StatusCode::OK, "{}", logged_in.text());
        let body = logged_in.json();

        TestUser {
            id: body["id"].as_str().unwrap().parse().unwrap(),
            email: email.to_string(),
            password: password.to_string(),
            token: body["token"].as_str().unwrap().to_string(),
        }
    }

    /// Create a test user with a unique email
    pub async fn create_unique_test_user(&self) -> TestUser {
        let email = format!("test_{}@example.com", Uuid::new_v4());
        self.create_test_user(&email, "test_password_123").await
    }

    pub async fn post_chirp(&self, token: Option<&str>, body: &str) -> TestResponse {
        self.request(
            Method::POST,
            "/api/chirps",
            Some(serde_json::json!({ "body": body })),
            token,
        )
        .await
    }
}
