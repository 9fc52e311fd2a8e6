//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected routes apply identical unauthenticated redirect behavior through
//! `RequireAuth`, which installs this effect.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::{GuardDecision, Session, guard};

/// Navigation options for guard redirects: replace the current entry so the
/// back button cannot return to the protected page.
#[must_use]
pub fn redirect_options() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// Redirect whenever the guard says so for the current session.
pub fn install_guard_redirect<F>(session: RwSignal<Session>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let GuardDecision::Redirect(route) = guard(&session.get()) {
            navigate(route, redirect_options());
        }
    });
}
