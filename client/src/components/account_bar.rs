//! Header strip for protected pages with navigation and log-out.
//!
//! Logging out clears the session even when the request fails, so the guard
//! unmounts this bar either way. A failure is left on `AuthContext::notice`
//! for the entry page to show.

#[cfg(test)]
#[path = "account_bar_test.rs"]
mod account_bar_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

#[cfg(any(test, feature = "hydrate"))]
use crate::net::api::ApiError;
use crate::state::auth::use_auth;
#[cfg(any(test, feature = "hydrate"))]
use crate::util::form::failure_message;

#[cfg(any(test, feature = "hydrate"))]
pub(crate) const LOGOUT_FAILED: &str =
    "Could not log out on the server. Your session may still be active, so try again.";

/// Message to show after a logout attempt, if it failed.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn logout_notice(result: &Result<(), ApiError>) -> Option<String> {
    result.as_ref().err().map(|e| failure_message(e, LOGOUT_FAILED))
}

/// Account bar shown above the dashboard and profile pages.
#[component]
pub fn AccountBar() -> impl IntoView {
    let auth = use_auth();
    let busy = RwSignal::new(false);
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let email = move || {
        auth.session
            .with(|session| session.user().and_then(|u| u.email().map(str::to_owned)))
            .unwrap_or_default()
    };

    let on_logout = move |_| {
        if busy.get() {
            return;
        }
        busy.set(true);
        auth.notice.set(None);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let result = auth.logout().await;
                auth.notice.set(logout_notice(&result));
                busy.set(false);
                navigate(crate::state::auth::ENTRY_ROUTE, crate::util::auth::redirect_options());
            });
        }
    };

    view! {
        <header class="account-bar">
            <nav class="account-bar__nav">
                <a href="/dashboard">"Dashboard"</a>
                <a href="/profile">"Profile"</a>
            </nav>
            <span class="account-bar__email">{email}</span>
            <button class="account-bar__logout" on:click=on_logout disabled=move || busy.get()>
                "Log out"
            </button>
        </header>
    }
}
