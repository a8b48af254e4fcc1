pub mod outcome;
pub mod pages;
pub mod use_cases;

pub use outcome::{FlowOutcome, HOME_PATH, LOGIN_PATH, Redirect};
pub use pages::{LoginPage, RegisterPage};
pub use use_cases::{
    login::{LOGIN_FAILED_MESSAGE, LoginError, LoginInput, LoginUseCase},
    logout::LogoutUseCase,
    register::{RegisterError, RegisterInput, RegisterUseCase},
};
