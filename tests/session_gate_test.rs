use athlete_track_ui::models::User;
use athlete_track_ui::router::{auth_gate_for, gate_for, AuthGate, Gate};
use athlete_track_ui::session::SessionState;

fn user() -> User {
    User {
        id: 1,
        username: "a".to_string(),
        name: None,
        role: None,
    }
}

#[test]
fn protected_routes_redirect_only_after_loading_settles() {
    assert_eq!(gate_for(&SessionState::Loading), Gate::Spinner);
    assert_eq!(gate_for(&SessionState::Anonymous), Gate::RedirectToAuth);
    assert_eq!(gate_for(&SessionState::Authenticated(user())), Gate::Render);
}

#[test]
fn auth_page_redirects_authenticated_visitors_home() {
    assert_eq!(auth_gate_for(&SessionState::Loading), AuthGate::Spinner);
    assert_eq!(auth_gate_for(&SessionState::Anonymous), AuthGate::Render);
    assert_eq!(
        auth_gate_for(&SessionState::Authenticated(user())),
        AuthGate::RedirectHome
    );
}

#[test]
fn session_state_exposes_the_user_only_when_authenticated() {
    assert!(SessionState::Loading.user().is_none());
    assert!(SessionState::Anonymous.user().is_none());

    let state = SessionState::Authenticated(user());
    assert_eq!(state.user().map(|u| u.id), Some(1));
    assert!(state.is_authenticated());
    assert!(!state.is_loading());
    assert!(SessionState::Loading.is_loading());
}
