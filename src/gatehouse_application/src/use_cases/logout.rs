use gatehouse_core::{SessionStore, SessionToken};

use crate::outcome::Redirect;

/// Logout use case - ends the current session
pub struct LogoutUseCase<S>
where
    S: SessionStore,
{
    session_store: S,
}

impl<S> LogoutUseCase<S>
where
    S: SessionStore,
{
    pub fn new(session_store: S) -> Self {
        Self { session_store }
    }

    /// Execute the logout use case
    ///
    /// Always sends the browser to the login page. A session backend failure
    /// is logged and otherwise ignored.
    #[tracing::instrument(name = "LogoutUseCase::execute", skip_all)]
    pub async fn execute(&self, session: Option<SessionToken>) -> Redirect {
        if let Some(token) = session {
            if let Err(e) = self.session_store.end(&token).await {
                tracing::warn!(error = %e, "Failed to end session");
            }
        }

        Redirect::login_page()
    }
}
