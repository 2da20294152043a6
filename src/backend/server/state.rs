/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * The `AppState` struct serves as the central state container, holding:
 * - The user and chirp store
 * - The token service, keyed with the server secret
 * - The token lifetime policy applied at login
 * - The file server hit counter
 * - The directory served under `/app`
 *
 * # State Extraction
 *
 * The `FromRef` implementations allow Axum handlers to extract specific
 * parts of the state without needing the entire `AppState`.
 *
 * ```rust,ignore
 * async fn handler(State(store): State<Arc<dyn Store>>) {
 *     let chirps = store.list_chirps().await;
 * }
 * ```
 */

use axum::extract::FromRef;
use std::path::PathBuf;
use std::sync::Arc;

use crate::backend::auth::tokens::{TokenLifetimePolicy, TokenService};
use crate::backend::middleware::metrics::FileServerHits;
use crate::backend::store::Store;

/// Application state shared by every request handler
///
/// # Fields
///
/// * `store` - User and chirp storage
/// * `tokens` - Issues and validates access tokens
/// * `token_lifetime` - Lifetime rules for tokens issued at login
/// * `file_server_hits` - Requests served under `/app`
/// * `static_dir` - Root directory of the file server
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub tokens: Arc<TokenService>,
    pub token_lifetime: TokenLifetimePolicy,
    pub file_server_hits: FileServerHits,
    pub static_dir: PathBuf,
}

impl AppState {
    /// Create state with a zeroed hit counter
    pub fn new(
        store: Arc<dyn Store>,
        tokens: TokenService,
        token_lifetime: TokenLifetimePolicy,
        static_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            store,
            tokens: Arc::new(tokens),
            token_lifetime,
            file_server_hits: FileServerHits::new(),
            static_dir: static_dir.into(),
        }
    }
}

impl FromRef<AppState> for Arc<dyn Store> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.store.clone()
    }
}

impl FromRef<AppState> for Arc<TokenService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}

impl FromRef<AppState> for TokenLifetimePolicy {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.token_lifetime
    }
}

impl FromRef<AppState> for FileServerHits {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.file_server_hits.clone()
    }
}
