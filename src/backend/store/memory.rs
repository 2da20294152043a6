/**
 * In-Memory Store
 *
 * Keeps users and chirps in process memory behind a tokio `RwLock`.
 * Nothing survives a restart.
 */

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::backend::auth::users::User;
use crate::backend::store::{Store, StoreError};
use crate::shared::Chirp;

#[derive(Debug, Default)]
struct MemoryState {
    users: HashMap<Uuid, User>,
    /// Insertion order is creation order
    chirps: Vec<Chirp>,
}

/// [`Store`] backed by process memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: RwLock<MemoryState>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn create_user(&self, email: &str, hashed_password: &str) -> Result<User, StoreError> {
        let mut state = self.state.write().await;
        if state.users.values().any(|user| user.email == email) {
            return Err(StoreError::Conflict("email"));
        }
        let user = User::new(email, hashed_password);
        state.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let state = self.state.read().await;
        Ok(state.users.values().find(|user| user.email == email).cloned())
    }

    async fn create_chirp(&self, user_id: Uuid, body: &str) -> Result<Chirp, StoreError> {
        let mut state = self.state.write().await;
        if !state.users.contains_key(&user_id) {
            return Err(StoreError::UnknownUser(user_id));
        }
        let chirp = Chirp::new(body, user_id);
        state.chirps.push(chirp.clone());
        Ok(chirp)
    }

    async fn list_chirps(&self) -> Result<Vec<Chirp>, StoreError> {
        Ok(self.state.read().await.chirps.clone())
    }

    async fn get_chirp(&self, id: Uuid) -> Result<Option<Chirp>, StoreError> {
        let state = self.state.read().await;
        Ok(state.chirps.iter().find(|chirp| chirp.id == id).cloned())
    }

    async fn reset(&self) -> Result<(), StoreError> {
        let mut state = self.state.write().await;
        state.users.clear();
        state.chirps.clear();
        Ok(())
    }
}
