//! Payloads handed to the view layer when a form is (re-)rendered.
//!
//! None of these ever carry a password or a password hash.

use gatehouse_core::NewUser;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterPage {
    pub title: &'static str,
    /// Echo of the submitted fields.
    pub user: NewUser,
    pub errors: Vec<String>,
    pub csrf_token: String,
}

impl RegisterPage {
    pub const TITLE: &'static str = "Register";

    pub fn empty(csrf_token: String) -> Self {
        Self {
            title: Self::TITLE,
            user: NewUser::default(),
            errors: Vec::new(),
            csrf_token,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginPage {
    pub title: &'static str,
    pub email_address: String,
    pub errors: Vec<String>,
    pub csrf_token: String,
}

impl LoginPage {
    pub const TITLE: &'static str = "Login";

    pub fn empty(csrf_token: String) -> Self {
        Self {
            title: Self::TITLE,
            email_address: String::new(),
            errors: Vec::new(),
            csrf_token,
        }
    }
}
