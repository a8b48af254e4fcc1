use gatehouse_core::{
    FormFields, Password, PasswordHashError, PasswordHasher, RuleSet, SessionStore,
    SessionStoreError, SessionToken, User, UserStore, UserStoreError,
    validation::fields as field,
};

use crate::{
    outcome::{FlowOutcome, Redirect},
    pages::LoginPage,
};

/// Shown for both an unknown email and a wrong password.
pub const LOGIN_FAILED_MESSAGE: &str = "Login failed for the provided email and password";

/// Error types specific to login use case
#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error("User store error: {0}")]
    UserStoreError(#[from] UserStoreError),
    #[error("Password hashing error: {0}")]
    PasswordHashError(#[from] PasswordHashError),
    #[error("Session store error: {0}")]
    SessionStoreError(#[from] SessionStoreError),
}

/// A submitted login form.
#[derive(Debug, Clone)]
pub struct LoginInput {
    pub fields: FormFields,
    pub csrf_token: String,
    /// Session the browser already carries; replaced on a successful login.
    pub current_session: Option<SessionToken>,
}

/// Login use case - handles user authentication
pub struct LoginUseCase<U, H, S>
where
    U: UserStore,
    H: PasswordHasher,
    S: SessionStore,
{
    user_store: U,
    password_hasher: H,
    session_store: S,
}

impl<U, H, S> LoginUseCase<U, H, S>
where
    U: UserStore,
    H: PasswordHasher,
    S: SessionStore,
{
    pub fn new(user_store: U, password_hasher: H, session_store: S) -> Self {
        Self {
            user_store,
            password_hasher,
            session_store,
        }
    }

    /// Execute the login use case
    ///
    /// # Returns
    /// A redirect home carrying the new session, or the login page with either
    /// the presence-check messages or [`LOGIN_FAILED_MESSAGE`]
    #[tracing::instrument(name = "LoginUseCase::execute", skip_all)]
    pub async fn execute(&self, input: LoginInput) -> Result<FlowOutcome<LoginPage>, LoginError> {
        let LoginInput {
            fields,
            csrf_token,
            current_session,
        } = input;
        let email_address = fields.value(field::EMAIL_ADDRESS).to_owned();

        let errors = match RuleSet::login().evaluate(&fields) {
            Err(errors) => errors.into_messages(),
            Ok(()) => {
                let password = Password::from(fields.value(field::PASSWORD).to_owned());
                if let Some(user) = self.authenticate(&email_address, &password).await? {
                    if let Some(previous) = current_session {
                        self.end_previous_session(&previous).await;
                    }
                    let session = self.session_store.establish(&user).await?;
                    tracing::info!("User logged in");
                    return Ok(FlowOutcome::Redirect(Redirect::home(session)));
                }
                tracing::info!("Login failed");
                vec![LOGIN_FAILED_MESSAGE.to_string()]
            }
        };

        Ok(FlowOutcome::Render(LoginPage {
            title: LoginPage::TITLE,
            email_address,
            errors,
            csrf_token,
        }))
    }

    async fn end_previous_session(&self, previous: &SessionToken) {
        if let Err(e) = self.session_store.end(previous).await {
            tracing::warn!(error = %e, "Failed to end the session replaced by this login");
        }
    }

    /// The user owning `email_address`, if `password` is theirs.
    async fn authenticate(
        &self,
        email_address: &str,
        password: &Password,
    ) -> Result<Option<User>, LoginError> {
        let Some(user) = self.user_store.find_by_email(email_address).await? else {
            return Ok(None);
        };

        let matches = self
            .password_hasher
            .verify(password, user.hashed_password())
            .await?;

        Ok(matches.then_some(user))
    }
}
