//! Authenticated session context.
//!
//! The session is a process-wide singleton provided at the app root. Views
//! read the current state through [`use_session`]; only the operations here
//! may transition it.

use dioxus::prelude::*;

use crate::api::{self, ApiError};
use crate::models::{LoginPayload, RegisterPayload, User};

/// Loading is distinct from Anonymous so protected routes can defer the
/// redirect until rehydration has settled.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Loading,
    Anonymous,
    Authenticated(User),
}

impl SessionState {
    pub fn user(&self) -> Option<&User> {
        match self {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, SessionState::Loading)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }
}

#[derive(Clone, Copy)]
pub struct Session {
    state: Signal<SessionState>,
    pending: Signal<bool>,
}

pub fn use_session() -> Session {
    use_context::<Session>()
}

impl Session {
    pub fn state(&self) -> SessionState {
        self.state.read().clone()
    }

    pub fn user(&self) -> Option<User> {
        self.state.read().user().cloned()
    }

    pub fn user_id(&self) -> Option<i64> {
        self.state.read().user().map(|u| u.id)
    }

    /// True while a login/register/logout call is in flight.
    pub fn is_pending(&self) -> bool {
        *self.pending.read()
    }

    fn set_state(&self, next: SessionState) {
        let mut state = self.state;
        state.set(next);
    }

    fn set_pending(&self, value: bool) {
        let mut pending = self.pending;
        pending.set(value);
    }

    /// A 401 observed mid-session: the cookie is gone, so the local session
    /// is torn down and the router takes over.
    pub fn expire(&self) {
        if self.state.read().is_authenticated() {
            tracing::info!("session expired, switching to anonymous");
            self.set_state(SessionState::Anonymous);
        }
    }

    pub async fn login(&self, payload: LoginPayload) -> Result<User, ApiError> {
        self.set_pending(true);
        let result = api::login(payload).await;
        self.set_pending(false);
        match &result {
            Ok(user) => {
                tracing::info!(user = %user.username, "logged in");
                self.set_state(SessionState::Authenticated(user.clone()));
            }
            Err(err) => {
                tracing::warn!(error = %err, "login failed");
            }
        }
        result
    }

    pub async fn register(&self, payload: RegisterPayload) -> Result<User, ApiError> {
        self.set_pending(true);
        let result = api::register(payload).await;
        self.set_pending(false);
        match &result {
            Ok(user) => {
                tracing::info!(user = %user.username, "registered");
                self.set_state(SessionState::Authenticated(user.clone()));
            }
            Err(err) => {
                tracing::warn!(error = %err, "registration failed");
            }
        }
        result
    }

    /// The local session is authoritative for UI gating: the state becomes
    /// Anonymous even when the server call fails.
    pub async fn logout(&self) {
        self.set_pending(true);
        if let Err(err) = api::logout().await {
            tracing::warn!(error = %err, "logout request failed, clearing session anyway");
        }
        self.set_state(SessionState::Anonymous);
        self.set_pending(false);
    }
}

/// Provides the session context and rehydrates it from the cookie on mount.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let state = use_signal(|| SessionState::Loading);
    let pending = use_signal(|| false);
    let session = use_context_provider(|| Session { state, pending });

    use_effect(move || {
        spawn(async move {
            match api::current_user().await {
                Ok(user) => {
                    tracing::info!(user = %user.username, "session rehydrated");
                    session.set_state(SessionState::Authenticated(user));
                }
                Err(ApiError::Unauthorized) => session.set_state(SessionState::Anonymous),
                Err(err) => {
                    tracing::warn!(error = %err, "session rehydration failed");
                    session.set_state(SessionState::Anonymous);
                }
            }
        });
    });

    rsx! {
        {children}
    }
}
