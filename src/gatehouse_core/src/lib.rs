pub mod domain;
pub mod ports;
pub mod validation;

// Re-export commonly used types for convenience
pub use domain::{
    password::{HashedPassword, Password},
    session::SessionToken,
    user::{NewUser, User},
};

pub use ports::{
    repositories::{SessionStore, SessionStoreError, UserStore, UserStoreError},
    services::{PasswordHashError, PasswordHasher},
};

pub use validation::{FormFields, RuleSet, ValidationErrors};
