use serde::{Deserialize, Serialize};

use crate::event::{Event, UserInfo};

/// Authentication status as last reported by the external collaborator. The
/// cache performs no authentication of its own.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoginState {
    #[default]
    Pending,
    Authenticated,
    Unauthenticated,
}

/// Session facts mirrored from the repository: login status, the current
/// user's profile, and the last session error.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub login_state: LoginState,
    pub user: UserInfo,
    pub error: Option<String>,
}

impl SessionState {
    pub fn new() -> Self {
        SessionState::default()
    }

    pub fn apply(mut self, event: &Event) -> Self {
        match event {
            Event::LoginSucceeded { user } => {
                self.login_state = LoginState::Authenticated;
                self.user = user.clone();
                self.error = None;
            }
            Event::LoginFailed { error } => {
                self.login_state = LoginState::Unauthenticated;
                self.error = Some(error.clone());
            }
            Event::LogoutSucceeded => {
                self.login_state = LoginState::Unauthenticated;
                self.user = UserInfo::default();
                self.error = None;
            }
            Event::LogoutFailed { error } => {
                self.login_state = LoginState::Unauthenticated;
                self.error = Some(error.clone());
            }
            Event::UserChanged { user } => {
                self.user = user.clone();
            }
            _ => {}
        }
        self
    }
}
