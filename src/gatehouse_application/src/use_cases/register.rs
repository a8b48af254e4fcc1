use gatehouse_core::{
    FormFields, NewUser, Password, PasswordHashError, PasswordHasher, RuleSet, SessionStore,
    SessionStoreError, UserStore, UserStoreError, validation::fields as field,
};

use crate::{
    outcome::{FlowOutcome, Redirect},
    pages::RegisterPage,
};

/// Error types for register use case
///
/// Only infrastructure failures end up here; invalid forms are a normal
/// [`FlowOutcome::Render`].
#[derive(Debug, thiserror::Error)]
pub enum RegisterError {
    #[error("User store error: {0}")]
    UserStoreError(#[from] UserStoreError),
    #[error("Password hashing error: {0}")]
    PasswordHashError(#[from] PasswordHashError),
    #[error("Session store error: {0}")]
    SessionStoreError(#[from] SessionStoreError),
}

/// A submitted registration form.
#[derive(Debug, Clone)]
pub struct RegisterInput {
    pub fields: FormFields,
    /// Token to embed if the form has to be shown again.
    pub csrf_token: String,
}

/// Register use case - validates the form, stores the user with a hashed
/// password and signs them in
pub struct RegisterUseCase<U, H, S>
where
    U: UserStore,
    H: PasswordHasher,
    S: SessionStore,
{
    user_store: U,
    password_hasher: H,
    session_store: S,
}

impl<U, H, S> RegisterUseCase<U, H, S>
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

    /// Execute the register use case
    ///
    /// # Returns
    /// A redirect home carrying the new session, or the register page with the
    /// validation messages and the submitted names echoed back
    #[tracing::instrument(name = "RegisterUseCase::execute", skip_all)]
    pub async fn execute(
        &self,
        input: RegisterInput,
    ) -> Result<FlowOutcome<RegisterPage>, RegisterError> {
        let RegisterInput { fields, csrf_token } = input;

        let candidate = NewUser::new(
            fields.value(field::EMAIL_ADDRESS),
            fields.value(field::FIRST_NAME),
            fields.value(field::LAST_NAME),
        );

        if let Err(errors) = RuleSet::registration().evaluate(&fields) {
            tracing::debug!(failures = errors.messages().len(), "Registration form rejected");
            return Ok(FlowOutcome::Render(RegisterPage {
                title: RegisterPage::TITLE,
                user: candidate,
                errors: errors.into_messages(),
                csrf_token,
            }));
        }

        let password = Password::from(fields.value(field::PASSWORD).to_owned());
        let hashed_password = self.password_hasher.hash(&password).await?;
        let user = candidate.into_user(hashed_password);

        self.user_store.save(user.clone()).await?;
        let session = self.session_store.establish(&user).await?;

        tracing::info!("User registered");
        Ok(FlowOutcome::Redirect(Redirect::home(session)))
    }
}
