//! Reset-password page bound to the `:token` route segment.
//!
//! Each submit sends one request to `/api/reset-password/{token}/`; the token
//! is forwarded exactly as it appears in the URL.

#[cfg(test)]
#[path = "reset_password_test.rs"]
mod reset_password_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::state::auth::use_auth;

pub(crate) const MIN_PASSWORD_LEN: usize = 8;
#[cfg(feature = "hydrate")]
const RESET_DONE: &str = "Password successfully reset. You can now log in.";
#[cfg(feature = "hydrate")]
const RESET_FAILED: &str = "Invalid or expired reset link.";

fn validate_new_password(password: &str, confirm: &str) -> Result<(), &'static str> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 8 characters.");
    }
    if password != confirm {
        return Err("Passwords do not match.");
    }
    Ok(())
}

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let auth = use_auth();
    let params = use_params_map();
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let done = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let password_value = password.get();
        let confirm_value = confirm.get();
        if let Err(msg) = validate_new_password(&password_value, &confirm_value) {
            error.set(Some(msg.to_owned()));
            return;
        }
        let token = params.with_untracked(|p| p.get("token").unwrap_or_default());
        busy.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match auth.api.reset_password(&token, &password_value, &confirm_value).await {
                Ok(payload) => done.set(Some(crate::util::form::payload_message(&payload, RESET_DONE))),
                Err(e) => error.set(Some(crate::util::form::failure_message(&e, RESET_FAILED))),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (auth, token, done);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Choose a new password"</h1>
                <Show
                    when=move || done.get().is_none()
                    fallback=move || {
                        view! {
                            <p class="auth-message auth-message--success">{move || done.get().unwrap_or_default()}</p>
                            <a class="auth-button" href="/">"Go to login"</a>
                        }
                    }
                >
                    <form class="auth-form" on:submit=on_submit>
                        <input
                            class="auth-input"
                            type="password"
                            placeholder="New password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <input
                            class="auth-input"
                            type="password"
                            placeholder="Confirm new password"
                            prop:value=move || confirm.get()
                            on:input=move |ev| confirm.set(event_target_value(&ev))
                        />
                        <button class="auth-button" type="submit" disabled=move || busy.get()>
                            "Reset password"
                        </button>
                    </form>
                </Show>
                <Show when=move || error.get().is_some()>
                    <p class="auth-message auth-message--error">{move || error.get().unwrap_or_default()}</p>
                </Show>
            </div>
        </div>
    }
}
