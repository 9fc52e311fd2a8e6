//! Registration page posting to `/api/auth/register/`.
//!
//! A successful registration does not sign the user in; the API emails a
//! verification link first, so the page only reports the outcome.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;

use crate::state::auth::use_auth;
use crate::util::form::required;

#[cfg(feature = "hydrate")]
const REGISTERED: &str = "Registration successful. Please check your email to verify your account.";
#[cfg(feature = "hydrate")]
const REGISTER_FAILED: &str = "Registration failed. Try again.";

fn validate_registration(email: &str, password: &str, confirm: &str) -> Result<(String, String), &'static str> {
    let email = required(email).ok_or("Enter your email.")?;
    if password.is_empty() {
        return Err("Choose a password.");
    }
    if password != confirm {
        return Err("Passwords do not match.");
    }
    Ok((email, password.to_owned()))
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = use_auth();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let success = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) =
            match validate_registration(&email.get(), &password.get(), &confirm.get()) {
                Ok(values) => values,
                Err(msg) => {
                    error.set(Some(msg.to_owned()));
                    return;
                }
            };
        busy.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match auth.register(email_value, password_value).await {
                Ok(payload) => success.set(Some(crate::util::form::payload_message(&payload, REGISTERED))),
                Err(e) => error.set(Some(crate::util::form::failure_message(&e, REGISTER_FAILED))),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (auth, email_value, password_value, success);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create an account"</h1>
                <Show
                    when=move || success.get().is_none()
                    fallback=move || {
                        view! {
                            <p class="auth-message auth-message--success">{move || success.get().unwrap_or_default()}</p>
                            <a class="auth-button" href="/">"Go to login"</a>
                        }
                    }
                >
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
                        <input
                            class="auth-input"
                            type="password"
                            placeholder="Confirm password"
                            prop:value=move || confirm.get()
                            on:input=move |ev| confirm.set(event_target_value(&ev))
                        />
                        <button class="auth-button" type="submit" disabled=move || busy.get()>
                            "Register"
                        </button>
                    </form>
                    <p class="auth-links">
                        <a href="/">"Already have an account? Sign in"</a>
                    </p>
                </Show>
                <Show when=move || error.get().is_some()>
                    <p class="auth-message auth-message--error">{move || error.get().unwrap_or_default()}</p>
                </Show>
            </div>
        </div>
    }
}
