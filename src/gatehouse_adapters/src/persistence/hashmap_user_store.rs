use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use gatehouse_core::{User, UserStore, UserStoreError};

#[derive(Default, Clone)]
pub struct HashMapUserStore {
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl HashMapUserStore {
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait::async_trait]
impl UserStore for HashMapUserStore {
    async fn find_by_email(&self, email_address: &str) -> Result<Option<User>, UserStoreError> {
        let users = self.users.read().await;
        Ok(users.get(email_address).cloned())
    }

    async fn save(&self, user: User) -> Result<(), UserStoreError> {
        let mut users = self.users.write().await;
        if users.contains_key(user.email_address()) {
            return Err(UserStoreError::UserAlreadyExists);
        }
        users.insert(user.email_address().to_owned(), user);
        Ok(())
    }
}
