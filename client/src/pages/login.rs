//! Login page: email + password against `/api/auth/login/`.
//!
//! On success the page re-fetches the session itself and moves to the
//! dashboard once a user is present. A notice left on the auth context by a
//! failed logout is shown above the form until the next sign-in attempt.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::state::auth::use_auth;
use crate::util::form::required;

#[cfg(feature = "hydrate")]
const LOGIN_FAILED: &str = "Login failed. Check your email and password.";
#[cfg(feature = "hydrate")]
const SESSION_MISSING: &str = "Signed in, but the session could not be loaded. Try again.";

fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = required(email).ok_or("Enter your email.")?;
    if password.is_empty() {
        return Err("Enter your password.");
    }
    Ok((email, password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_login_input(&email.get(), &password.get()) {
            Ok(values) => values,
            Err(msg) => {
                error.set(Some(msg.to_owned()));
                return;
            }
        };
        busy.set(true);
        error.set(None);
        auth.notice.set(None);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match auth.login(email_value, password_value).await {
                    Ok(_) => {
                        if auth.refetch_session().await {
                            navigate("/dashboard", leptos_router::NavigateOptions::default());
                        } else {
                            error.set(Some(SESSION_MISSING.to_owned()));
                        }
                    }
                    Err(e) => error.set(Some(crate::util::form::failure_message(&e, LOGIN_FAILED))),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (auth, email_value, password_value);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Sign in"</h1>
                <Show when=move || auth.notice.get().is_some()>
                    <p class="auth-message auth-message--error">{move || auth.notice.get().unwrap_or_default()}</p>
                </Show>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        "Sign in"
                    </button>
                </form>
                <Show when=move || error.get().is_some()>
                    <p class="auth-message auth-message--error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <p class="auth-links">
                    <a href="/register">"Create an account"</a>
                    " · "
                    <a href="/forgot-password">"Forgot password?"</a>
                </p>
            </div>
        </div>
    }
}
