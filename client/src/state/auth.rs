//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware pages to coordinate login redirects
//! and identity-dependent rendering.
//!
//! DESIGN
//! ======
//! The session is a three-state machine instead of a `user` + `loading` pair,
//! so "loading with a user" cannot be represented. Writes go through the
//! `SessionStore` trait: the app stores the session in an `RwSignal`, tests
//! use a plain `RefCell`.
//!
//! Transitions:
//! - `Pending -> Anonymous | Authenticated`: once, by `load_session`.
//! - `* -> Anonymous`: by `logout`.
//! - `* -> Anonymous | Authenticated`: by `refetch_session` after a login.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use serde_json::Value;

use crate::net::api::{ApiError, AuthApi, BrowserTransport, Transport};
use crate::net::types::UserRecord;

/// Route unauthenticated visitors are sent to.
pub const ENTRY_ROUTE: &str = "/";

/// What the client currently believes about the signed-in user.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Session {
    /// Initial session fetch has not resolved yet.
    #[default]
    Pending,
    Anonymous,
    Authenticated(UserRecord),
}

impl Session {
    /// Session for the outcome of a `GET /api/user/` call.
    #[must_use]
    pub fn from_fetch(result: Result<Option<UserRecord>, ApiError>) -> Self {
        match result {
            Ok(Some(user)) => Self::Authenticated(user),
            Ok(None) => Self::Anonymous,
            Err(e) => {
                log::info!("session fetch failed, treating as signed out: {e}");
                Self::Anonymous
            }
        }
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    #[must_use]
    pub fn user(&self) -> Option<&UserRecord> {
        match self {
            Self::Authenticated(user) => Some(user),
            Self::Pending | Self::Anonymous => None,
        }
    }
}

// =============================================================================
// GUARD
// =============================================================================

/// Outcome of consulting the guard for a protected route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Show the loading placeholder.
    Wait,
    /// Replace the current history entry with this route.
    Redirect(&'static str),
    /// Render the protected content.
    Render,
}

/// Decide what a protected route shows for the given session.
#[must_use]
pub fn guard(session: &Session) -> GuardDecision {
    match session {
        Session::Pending => GuardDecision::Wait,
        Session::Anonymous => GuardDecision::Redirect(ENTRY_ROUTE),
        Session::Authenticated(_) => GuardDecision::Render,
    }
}

// =============================================================================
// STORE
// =============================================================================

/// Read/write access to the shared session slot.
pub trait SessionStore {
    fn current(&self) -> Session;
    fn replace(&self, next: Session);
}

impl SessionStore for RwSignal<Session> {
    fn current(&self) -> Session {
        self.get_untracked()
    }

    fn replace(&self, next: Session) {
        self.set(next);
    }
}

// =============================================================================
// ACTIONS
// =============================================================================

/// Initial session fetch. Issues exactly one request and resolves the store
/// only if it is still `Pending`.
pub async fn load_session<T: Transport>(api: &AuthApi<T>, store: &impl SessionStore) {
    let next = Session::from_fetch(api.fetch_current_user().await);
    if store.current().is_pending() {
        store.replace(next);
    } else {
        log::debug!("session already resolved, dropping initial fetch result");
    }
}

/// Re-fetch the session after a login. Returns whether a user is now present.
pub async fn refetch_session<T: Transport>(api: &AuthApi<T>, store: &impl SessionStore) -> bool {
    let next = Session::from_fetch(api.fetch_current_user().await);
    let authenticated = next.user().is_some();
    store.replace(next);
    authenticated
}

/// Log out and clear the session once the request has completed.
///
/// # Errors
///
/// The logout request's error, returned after the session is cleared.
pub async fn logout<T: Transport>(api: &AuthApi<T>, store: &impl SessionStore) -> Result<(), ApiError> {
    let result = api.logout().await;
    if let Err(e) = &result {
        log::warn!("logout request failed: {e}");
    }
    store.replace(Session::Anonymous);
    result
}

// =============================================================================
// CONTEXT
// =============================================================================

/// Auth handle provided to the component tree by `App`.
#[derive(Clone, Copy, Debug)]
pub struct AuthContext {
    pub session: RwSignal<Session>,
    /// Message carried across a redirect, shown by the entry page.
    pub notice: RwSignal<Option<String>>,
    pub api: AuthApi<BrowserTransport>,
}

impl AuthContext {
    /// Fresh context in the `Pending` state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            session: RwSignal::new(Session::Pending),
            notice: RwSignal::new(None),
            api: AuthApi::new(BrowserTransport),
        }
    }

    pub async fn load_session(self) {
        load_session(&self.api, &self.session).await;
    }

    pub async fn refetch_session(self) -> bool {
        refetch_session(&self.api, &self.session).await
    }

    /// # Errors
    ///
    /// Returns the transport or server error unchanged.
    pub async fn login(self, email: String, password: String) -> Result<Value, ApiError> {
        self.api.login(&email, &password).await
    }

    /// # Errors
    ///
    /// Returns the transport or server error unchanged.
    pub async fn register(self, email: String, password: String) -> Result<Value, ApiError> {
        self.api.register(&email, &password).await
    }

    /// # Errors
    ///
    /// Returns the logout request's error after clearing the session.
    pub async fn logout(self) -> Result<(), ApiError> {
        logout(&self.api, &self.session).await
    }

    /// # Errors
    ///
    /// Returns the transport or server error unchanged.
    pub async fn refresh_access_token(self) -> Result<(), ApiError> {
        self.api.refresh_access_token().await
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Fetch the `AuthContext` provided by `App`.
#[must_use]
pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}
