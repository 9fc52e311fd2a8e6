//! Forgot-password page: asks the API to email a reset link.

use leptos::prelude::*;

use crate::state::auth::use_auth;
use crate::util::form::required;

#[cfg(feature = "hydrate")]
const RESET_REQUESTED: &str = "If this email exists in our system, you will receive a reset link.";
#[cfg(feature = "hydrate")]
const RESET_REQUEST_FAILED: &str = "Could not request a reset link. Try again.";

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let auth = use_auth();
    let email = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let sent = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let Some(email_value) = required(&email.get()) else {
            error.set(Some("Enter your email.".to_owned()));
            return;
        };
        busy.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match auth.api.request_password_reset(&email_value).await {
                Ok(payload) => sent.set(Some(crate::util::form::payload_message(&payload, RESET_REQUESTED))),
                Err(e) => error.set(Some(crate::util::form::failure_message(&e, RESET_REQUEST_FAILED))),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (auth, email_value, sent);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Reset your password"</h1>
                <Show
                    when=move || sent.get().is_none()
                    fallback=move || {
                        view! { <p class="auth-message auth-message--success">{move || sent.get().unwrap_or_default()}</p> }
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
                        <button class="auth-button" type="submit" disabled=move || busy.get()>
                            "Send reset link"
                        </button>
                    </form>
                </Show>
                <Show when=move || error.get().is_some()>
                    <p class="auth-message auth-message--error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <p class="auth-links">
                    <a href="/">"Back to login"</a>
                </p>
            </div>
        </div>
    }
}
