use gatehouse_core::SessionToken;

pub const HOME_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/user/login";

/// Where to send the browser next, and the session it now holds, if one was
/// just established.
#[derive(Debug, PartialEq, Eq)]
pub struct Redirect {
    pub target: &'static str,
    pub session: Option<SessionToken>,
}

impl Redirect {
    pub fn home(session: SessionToken) -> Self {
        Self {
            target: HOME_PATH,
            session: Some(session),
        }
    }

    pub fn login_page() -> Self {
        Self {
            target: LOGIN_PATH,
            session: None,
        }
    }
}

/// Result of handling one form submission.
#[derive(Debug, PartialEq, Eq)]
pub enum FlowOutcome<P> {
    /// The flow succeeded.
    Redirect(Redirect),
    /// The form must be shown again with this payload.
    Render(P),
}

impl<P> FlowOutcome<P> {
    pub fn is_redirect(&self) -> bool {
        matches!(self, FlowOutcome::Redirect(_))
    }
}
