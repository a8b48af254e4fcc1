use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{session::SessionToken, user::User};

// UserStore port trait and errors
#[derive(Debug, Error)]
pub enum UserStoreError {
    #[error("User already exists")]
    UserAlreadyExists,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for UserStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::UserAlreadyExists, Self::UserAlreadyExists)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

#[async_trait]
pub trait UserStore: Send + Sync {
    /// Look up exactly one user by exact email address match.
    async fn find_by_email(&self, email_address: &str) -> Result<Option<User>, UserStoreError>;
    /// Persist a new user. Fails with `UserAlreadyExists` on a duplicate email.
    async fn save(&self, user: User) -> Result<(), UserStoreError>;
}

// SessionStore port trait and errors
#[derive(Debug, Error)]
pub enum SessionStoreError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Start a logged-in session for `user` and return its token.
    async fn establish(&self, user: &User) -> Result<SessionToken, SessionStoreError>;
    /// End the session. Ending an unknown or expired session is not an error.
    async fn end(&self, token: &SessionToken) -> Result<(), SessionStoreError>;
    /// Email address of the user owning a live session, if any.
    async fn lookup(&self, token: &SessionToken) -> Result<Option<String>, SessionStoreError>;
}
