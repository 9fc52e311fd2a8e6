//! Dashboard page for signed-in users.
//!
//! Rendered inside `RequireAuth`, so the session always holds a user here.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::account_bar::AccountBar;
use crate::state::auth::use_auth;

/// Greeting text for the signed-in user.
pub(crate) fn greeting(email: Option<&str>) -> String {
    match email {
        Some(email) => format!("Welcome back, {email}."),
        None => "Welcome back.".to_owned(),
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth();
    let refresh_status = RwSignal::new(None::<String>);
    let refreshing = RwSignal::new(false);

    let title = move || auth.session.with(|session| greeting(session.user().and_then(|u| u.email())));

    let on_refresh = move |_| {
        if refreshing.get() {
            return;
        }
        refreshing.set(true);
        refresh_status.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let status = match auth.refresh_access_token().await {
                Ok(()) => "Session refreshed.".to_owned(),
                Err(e) => crate::util::form::failure_message(&e, "Could not refresh the session."),
            };
            refresh_status.set(Some(status));
            refreshing.set(false);
        });
    };

    view! {
        <div class="dashboard-page">
            <AccountBar/>
            <main class="dashboard-page__body">
                <h1>{title}</h1>
                <p>
                    "View your account details on the "
                    <a href="/profile">"profile page"</a>
                    "."
                </p>
                <button class="auth-button" on:click=on_refresh disabled=move || refreshing.get()>
                    "Refresh session"
                </button>
                <Show when=move || refresh_status.get().is_some()>
                    <p class="auth-message">{move || refresh_status.get().unwrap_or_default()}</p>
                </Show>
            </main>
        </div>
    }
}
