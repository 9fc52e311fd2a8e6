use std::cell::RefCell;

use super::*;
use crate::net::fake_transport::FakeTransport;
use futures::executor::block_on;
use serde_json::json;

impl SessionStore for RefCell<Session> {
    fn current(&self) -> Session {
        self.borrow().clone()
    }

    fn replace(&self, next: Session) {
        *self.borrow_mut() = next;
    }
}

fn user(email: &str) -> UserRecord {
    serde_json::from_value(json!({ "id": 1, "email": email })).unwrap()
}

fn api(replies: impl IntoIterator<Item = Result<Value, ApiError>>) -> AuthApi<FakeTransport> {
    AuthApi::new(FakeTransport::replying(replies))
}

// =============================================================
// Session + guard
// =============================================================

#[test]
fn session_default_is_pending() {
    assert_eq!(Session::default(), Session::Pending);
    assert!(Session::default().user().is_none());
}

#[test]
fn guard_waits_while_pending() {
    assert_eq!(guard(&Session::Pending), GuardDecision::Wait);
}

#[test]
fn guard_redirects_anonymous_to_entry_route() {
    assert_eq!(guard(&Session::Anonymous), GuardDecision::Redirect("/"));
}

#[test]
fn guard_renders_for_authenticated_user() {
    assert_eq!(guard(&Session::Authenticated(user("a@b.com"))), GuardDecision::Render);
}

#[test]
fn from_fetch_maps_every_outcome() {
    assert_eq!(Session::from_fetch(Ok(Some(user("a@b.com")))), Session::Authenticated(user("a@b.com")));
    assert_eq!(Session::from_fetch(Ok(None)), Session::Anonymous);
    assert_eq!(Session::from_fetch(Err(ApiError::Transport("offline".to_owned()))), Session::Anonymous);
    assert_eq!(Session::from_fetch(Err(ApiError::rejected(401, ""))), Session::Anonymous);
}

// =============================================================
// Initial session fetch
// =============================================================

#[test]
fn load_session_resolves_authenticated_and_guard_renders() {
    let api = api([Ok(json!({ "id": 1, "email": "a@b.com" }))]);
    let store = RefCell::new(Session::Pending);
    assert_eq!(guard(&store.current()), GuardDecision::Wait);

    block_on(load_session(&api, &store));

    assert_eq!(store.current(), Session::Authenticated(user("a@b.com")));
    assert_eq!(guard(&store.current()), GuardDecision::Render);
}

#[test]
fn load_session_failure_redirects_protected_routes() {
    let api = api([Err(ApiError::rejected(401, r#"{"detail":"not authenticated"}"#))]);
    let store = RefCell::new(Session::Pending);

    block_on(load_session(&api, &store));

    assert_eq!(store.current(), Session::Anonymous);
    assert_eq!(guard(&store.current()), GuardDecision::Redirect(ENTRY_ROUTE));
}

#[test]
fn load_session_no_user_is_anonymous() {
    let api = api([Ok(Value::Null)]);
    let store = RefCell::new(Session::Pending);
    block_on(load_session(&api, &store));
    assert_eq!(store.current(), Session::Anonymous);
}

#[test]
fn load_session_issues_exactly_one_request() {
    let api = api([Err(ApiError::Transport("offline".to_owned()))]);
    let store = RefCell::new(Session::Pending);
    block_on(load_session(&api, &store));
    assert_eq!(api.transport().sent().len(), 1);
}

#[test]
fn load_session_does_not_overwrite_resolved_session() {
    let api = api([Ok(json!({ "id": 1, "email": "late@b.com" }))]);
    let store = RefCell::new(Session::Anonymous);

    block_on(load_session(&api, &store));

    assert_eq!(store.current(), Session::Anonymous);
}

// =============================================================
// Login re-fetch and logout
// =============================================================

#[test]
fn refetch_session_after_login_moves_anonymous_to_authenticated() {
    let api = api([Ok(json!({ "id": 1, "email": "a@b.com" }))]);
    let store = RefCell::new(Session::Anonymous);

    assert!(block_on(refetch_session(&api, &store)));
    assert_eq!(guard(&store.current()), GuardDecision::Render);
}

#[test]
fn refetch_session_failure_leaves_anonymous() {
    let api = api([Err(ApiError::Transport("offline".to_owned()))]);
    let store = RefCell::new(Session::Anonymous);

    assert!(!block_on(refetch_session(&api, &store)));
    assert_eq!(store.current(), Session::Anonymous);
}

#[test]
fn logout_clears_session_and_guard_redirects() {
    let api = api([Ok(json!({ "message": "Logout successful" }))]);
    let store = RefCell::new(Session::Authenticated(user("a@b.com")));

    assert_eq!(block_on(logout(&api, &store)), Ok(()));
    assert_eq!(store.current(), Session::Anonymous);
    assert_eq!(guard(&store.current()), GuardDecision::Redirect("/"));
}

#[test]
fn logout_failure_still_clears_session_and_propagates_error() {
    let api = api([Err(ApiError::rejected(500, ""))]);
    let store = RefCell::new(Session::Authenticated(user("a@b.com")));

    let result = block_on(logout(&api, &store));

    assert_eq!(result, Err(ApiError::Rejected { status: 500, detail: None }));
    assert_eq!(store.current(), Session::Anonymous);
}
