use crate::domain::model::User;
use crate::domain::ports::UserRepository;
use crate::utils::error::{Result, SignupError};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Default)]
struct Store {
    users: HashMap<u64, User>,
    next_id: u64,
}

/// Process-local user store. Ids start at 1; emails are unique.
#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    store: Arc<Mutex<Store>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.store.lock().await.users.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: u64) -> Result<Option<User>> {
        let store = self.store.lock().await;
        Ok(store.users.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let store = self.store.lock().await;
        Ok(store.users.values().find(|u| u.email == email).cloned())
    }

    async fn create(&self, name: &str, email: &str, city: &str) -> Result<User> {
        // uniqueness check and insert under one lock
        let mut store = self.store.lock().await;
        if store.users.values().any(|u| u.email == email) {
            return Err(SignupError::EmailTaken {
                email: email.to_string(),
            });
        }

        store.next_id += 1;
        let user = User {
            id: store.next_id,
            name: name.to_string(),
            email: email.to_string(),
            city: city.to_string(),
            created_at: Utc::now(),
        };
        store.users.insert(user.id, user.clone());
        Ok(user)
    }
}
