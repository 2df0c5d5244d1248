use client::ApiClient;
use dioxus::prelude::*;
use shared_types::{AuthUser, SessionState, UserRole};

/// Global authentication state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthState {
    pub current_user: Signal<Option<AuthUser>>,
    /// Set once the initial `current_user` lookup has finished.
    pub resolved: Signal<bool>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            current_user: Signal::new(None),
            resolved: Signal::new(false),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user.read().is_some()
    }

    pub fn set_user(&mut self, user: AuthUser) {
        self.current_user.set(Some(user));
        self.resolved.set(true);
    }

    pub fn clear_auth(&mut self) {
        self.current_user.set(None);
        self.resolved.set(true);
    }

    /// Session as seen by permission guards.
    pub fn session(&self) -> SessionState {
        match self.current_user.read().as_ref() {
            Some(user) => SessionState::Authenticated(user.user_type.clone()),
            None if *self.resolved.read() => SessionState::Anonymous,
            None => SessionState::Loading,
        }
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

/// Hook to access the shared API client.
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}

/// Role of the signed-in user, if any.
pub fn use_user_role() -> Option<UserRole> {
    let auth = use_auth();
    let role = auth.current_user.read().as_ref().map(|u| u.user_type.clone());
    role
}

pub fn use_session_state() -> SessionState {
    use_auth().session()
}
