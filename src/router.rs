//! Route table and the authentication gate.
//!
//! Matching is exact per path; the catch-all 404 sits last. Everything under
//! the [`RequireAuth`] layout is protected; `/auth` is the only public page.

use dioxus::prelude::*;

use crate::components::{AppShell, FullPageSpinner};
use crate::session::{use_session, SessionState};
use crate::views::{
    AiCoach, Auth, Dashboard, Finances, Injuries, NotFound, Nutrition, Performance, Settings,
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(RequireAuth)]
        #[route("/")]
        Dashboard {},
        #[route("/performance")]
        Performance {},
        #[route("/nutrition")]
        Nutrition {},
        #[route("/injuries")]
        Injuries {},
        #[route("/finances")]
        Finances {},
        #[route("/ai-coach")]
        AiCoach {},
        #[route("/settings")]
        Settings {},
    #[end_layout]
    #[route("/auth")]
    Auth {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

/// What a protected route renders for a given session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    /// Session still rehydrating; the redirect must wait.
    Spinner,
    RedirectToAuth,
    Render,
}

pub fn gate_for(state: &SessionState) -> Gate {
    match state {
        SessionState::Loading => Gate::Spinner,
        SessionState::Anonymous => Gate::RedirectToAuth,
        SessionState::Authenticated(_) => Gate::Render,
    }
}

/// The auth page inverts the gate: an authenticated visitor goes home.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthGate {
    Spinner,
    RedirectHome,
    Render,
}

pub fn auth_gate_for(state: &SessionState) -> AuthGate {
    match state {
        SessionState::Loading => AuthGate::Spinner,
        SessionState::Anonymous => AuthGate::Render,
        SessionState::Authenticated(_) => AuthGate::RedirectHome,
    }
}

#[component]
fn RequireAuth() -> Element {
    let session = use_session();
    let nav = use_navigator();
    let state = session.state();

    match gate_for(&state) {
        Gate::Spinner => rsx! {
            FullPageSpinner {}
        },
        Gate::RedirectToAuth => {
            nav.replace(Route::Auth {});
            rsx! {}
        }
        Gate::Render => {
            let user = state.user().cloned().expect("gate renders only when authenticated");
            rsx! {
                AppShell { user,
                    Outlet::<Route> {}
                }
            }
        }
    }
}
