use std::sync::Arc;

use gatehouse_core::{SessionStore, SessionStoreError, SessionToken, User};
use redis::{Commands, Connection};
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Clone)]
pub struct RedisSessionStore {
    conn: Arc<RwLock<Connection>>,
    session_ttl: u64,
}

impl RedisSessionStore {
    pub fn new(conn: Arc<RwLock<Connection>>, session_ttl: u64) -> Self {
        Self { conn, session_ttl }
    }
}

#[async_trait::async_trait]
impl SessionStore for RedisSessionStore {
    #[tracing::instrument(name = "Establishing session in Redis", skip_all)]
    async fn establish(&self, user: &User) -> Result<SessionToken, SessionStoreError> {
        let token = Uuid::new_v4().simple().to_string();
        let key = get_key(&token);

        let mut conn = self.conn.write().await;
        conn.set_ex::<_, _, ()>(key, user.email_address(), self.session_ttl)
            .map_err(|e| SessionStoreError::DatabaseError(e.to_string()))?;

        Ok(SessionToken::new(token))
    }

    #[tracing::instrument(name = "Ending session in Redis", skip_all)]
    async fn end(&self, token: &SessionToken) -> Result<(), SessionStoreError> {
        let key = get_key(token.as_str());

        let mut conn = self.conn.write().await;
        conn.del::<_, ()>(key)
            .map_err(|e| SessionStoreError::DatabaseError(e.to_string()))
    }

    async fn lookup(&self, token: &SessionToken) -> Result<Option<String>, SessionStoreError> {
        let key = get_key(token.as_str());

        let mut conn = self.conn.write().await;
        conn.get::<_, Option<String>>(key)
            .map_err(|e| SessionStoreError::DatabaseError(e.to_string()))
    }
}

const SESSION_KEY_PREFIX: &str = "session:";

fn get_key(token: &str) -> String {
    format!("{}{}", SESSION_KEY_PREFIX, token)
}
