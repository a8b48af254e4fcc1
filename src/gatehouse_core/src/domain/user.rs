use crate::domain::password::HashedPassword;

/// A user being registered, built straight from the submitted form.
///
/// Carries no password: the only way to get a persistable [`User`] is
/// [`NewUser::into_user`], which takes an already hashed password.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewUser {
    pub email_address: String,
    pub first_name: String,
    pub last_name: String,
}

impl NewUser {
    pub fn new(
        email_address: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            email_address: email_address.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    pub fn into_user(self, hashed_password: HashedPassword) -> User {
        User {
            email_address: self.email_address,
            first_name: self.first_name,
            last_name: self.last_name,
            hashed_password,
        }
    }
}

/// A registered user as held by a [`UserStore`](crate::UserStore).
#[derive(Debug, Clone)]
pub struct User {
    email_address: String,
    first_name: String,
    last_name: String,
    hashed_password: HashedPassword,
}

impl User {
    /// Rebuild a user from stored columns.
    pub fn from_parts(
        email_address: String,
        first_name: String,
        last_name: String,
        hashed_password: HashedPassword,
    ) -> Self {
        Self {
            email_address,
            first_name,
            last_name,
            hashed_password,
        }
    }

    pub fn email_address(&self) -> &str {
        &self.email_address
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn hashed_password(&self) -> &HashedPassword {
        &self.hashed_password
    }
}
