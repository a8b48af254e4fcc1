//! Hand-written port doubles shared by the use case tests.

use std::{
    collections::HashMap,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
};

use gatehouse_core::{
    HashedPassword, Password, PasswordHashError, PasswordHasher, SessionStore, SessionStoreError,
    SessionToken, User, UserStore, UserStoreError,
};
use secrecy::{ExposeSecret, Secret};
use tokio::sync::RwLock;

#[derive(Clone, Default)]
pub struct MockUserStore {
    pub users: Arc<RwLock<HashMap<String, User>>>,
}

impl MockUserStore {
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }
}

#[async_trait::async_trait]
impl UserStore for MockUserStore {
    async fn find_by_email(&self, email_address: &str) -> Result<Option<User>, UserStoreError> {
        Ok(self.users.read().await.get(email_address).cloned())
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

/// Reversible stand-in for a real hash; good enough to tell hash from plaintext.
#[derive(Clone, Default)]
pub struct MockPasswordHasher;

#[async_trait::async_trait]
impl PasswordHasher for MockPasswordHasher {
    async fn hash(&self, password: &Password) -> Result<HashedPassword, PasswordHashError> {
        Ok(HashedPassword::from_hash(Secret::new(format!(
            "mock-hash:{}",
            password.as_ref().expose_secret()
        ))))
    }

    async fn verify(
        &self,
        password: &Password,
        hash: &HashedPassword,
    ) -> Result<bool, PasswordHashError> {
        let expected = self.hash(password).await?;
        Ok(expected.as_ref().expose_secret() == hash.as_ref().expose_secret())
    }
}

#[derive(Clone, Default)]
pub struct MockSessionStore {
    pub sessions: Arc<RwLock<HashMap<String, String>>>,
    issued: Arc<AtomicUsize>,
}

impl MockSessionStore {
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[async_trait::async_trait]
impl SessionStore for MockSessionStore {
    async fn establish(&self, user: &User) -> Result<SessionToken, SessionStoreError> {
        let token = format!("session-{}", self.issued.fetch_add(1, Ordering::Relaxed) + 1);
        self.sessions
            .write()
            .await
            .insert(token.clone(), user.email_address().to_owned());
        Ok(SessionToken::new(token))
    }

    async fn end(&self, token: &SessionToken) -> Result<(), SessionStoreError> {
        self.sessions.write().await.remove(token.as_str());
        Ok(())
    }

    async fn lookup(&self, token: &SessionToken) -> Result<Option<String>, SessionStoreError> {
        Ok(self.sessions.read().await.get(token.as_str()).cloned())
    }
}

/// Session backend that is always down.
#[derive(Clone, Default)]
pub struct UnavailableSessionStore;

#[async_trait::async_trait]
impl SessionStore for UnavailableSessionStore {
    async fn establish(&self, _user: &User) -> Result<SessionToken, SessionStoreError> {
        Err(SessionStoreError::DatabaseError("connection refused".to_string()))
    }

    async fn end(&self, _token: &SessionToken) -> Result<(), SessionStoreError> {
        Err(SessionStoreError::DatabaseError("connection refused".to_string()))
    }

    async fn lookup(&self, _token: &SessionToken) -> Result<Option<String>, SessionStoreError> {
        Err(SessionStoreError::DatabaseError("connection refused".to_string()))
    }
}

pub async fn seeded_user_store(email_address: &str, password: &str) -> MockUserStore {
    let store = MockUserStore::default();
    let hash = MockPasswordHasher
        .hash(&Password::from(password.to_string()))
        .await
        .unwrap();
    let user = gatehouse_core::NewUser::new(email_address, "Jo", "Lee").into_user(hash);
    store.save(user).await.unwrap();
    store
}
