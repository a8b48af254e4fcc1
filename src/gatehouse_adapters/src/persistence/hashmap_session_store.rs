use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use gatehouse_core::{SessionStore, SessionStoreError, SessionToken, User};
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug, Clone)]
struct SessionRecord {
    email_address: String,
    expires_at: DateTime<Utc>,
}

/// In-process session store.
///
/// Expired sessions are dropped on lookup, and swept whenever a new session is established.
#[derive(Clone)]
pub struct HashMapSessionStore {
    sessions: Arc<RwLock<HashMap<String, SessionRecord>>>,
    ttl: Duration,
}

impl HashMapSessionStore {
    pub fn new(ttl_in_seconds: i64) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            ttl: Duration::seconds(ttl_in_seconds),
        }
    }
}

#[async_trait::async_trait]
impl SessionStore for HashMapSessionStore {
    async fn establish(&self, user: &User) -> Result<SessionToken, SessionStoreError> {
        let now = Utc::now();
        let token = Uuid::new_v4().simple().to_string();
        let record = SessionRecord {
            email_address: user.email_address().to_owned(),
            expires_at: now + self.ttl,
        };

        let mut sessions = self.sessions.write().await;
        sessions.retain(|_, record| record.expires_at > now);
        sessions.insert(token.clone(), record);
        Ok(SessionToken::new(token))
    }

    async fn end(&self, token: &SessionToken) -> Result<(), SessionStoreError> {
        self.sessions.write().await.remove(token.as_str());
        Ok(())
    }

    async fn lookup(&self, token: &SessionToken) -> Result<Option<String>, SessionStoreError> {
        let mut sessions = self.sessions.write().await;
        match sessions.get(token.as_str()) {
            Some(record) if record.expires_at > Utc::now() => {
                Ok(Some(record.email_address.clone()))
            }
            Some(_) => {
                sessions.remove(token.as_str());
                Ok(None)
            }
            None => Ok(None),
        }
    }
}
