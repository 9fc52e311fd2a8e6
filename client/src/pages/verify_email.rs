//! Email verification page for links of the form `/verify-email/:token`.
//!
//! The verification request is sent once per token: on mount, and again only
//! if in-app navigation swaps the route token. Success and failure render
//! mutually exclusive branches; nothing but a placeholder is shown while the
//! request is in flight.

#[cfg(test)]
#[path = "verify_email_test.rs"]
mod verify_email_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::hooks::use_params_map;

use crate::net::api::ApiError;
use crate::state::auth::{ENTRY_ROUTE, use_auth};

pub(crate) const VERIFIED_MESSAGE: &str = "Email successfully verified! You can now log in.";
pub(crate) const INVALID_TOKEN_MESSAGE: &str = "Invalid or expired verification token.";

/// Outcome of the one-shot verification request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VerifyStatus {
    Pending,
    Verified,
    Failed,
}

impl VerifyStatus {
    /// Any failure, transport or server, collapses to `Failed`.
    #[must_use]
    pub fn from_result(result: &Result<(), ApiError>) -> Self {
        if result.is_ok() { Self::Verified } else { Self::Failed }
    }

    /// `(message, show_login_link)` for the current status.
    #[must_use]
    pub fn message(self) -> Option<(&'static str, bool)> {
        match self {
            Self::Pending => None,
            Self::Verified => Some((VERIFIED_MESSAGE, true)),
            Self::Failed => Some((INVALID_TOKEN_MESSAGE, false)),
        }
    }
}

/// Whether `token` has not been sent yet. `last` is the token of the most
/// recent request, if any.
pub(crate) fn needs_verification(last: Option<&str>, token: &str) -> bool {
    last != Some(token)
}

#[component]
pub fn VerifyEmailPage() -> impl IntoView {
    let auth = use_auth();
    let params = use_params_map();
    let status = RwSignal::new(VerifyStatus::Pending);
    let last_token = StoredValue::new(None::<String>);

    // Tracks the route token; re-runs on param changes but sends each token once.
    Effect::new(move || {
        let token = params.with(|p| p.get("token").unwrap_or_default());
        if !last_token.with_value(|last| needs_verification(last.as_deref(), &token)) {
            return;
        }
        last_token.set_value(Some(token.clone()));
        status.set(VerifyStatus::Pending);

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let result = auth.api.verify_email(&token).await;
                if let Err(e) = &result {
                    log::info!("email verification failed: {e}");
                }
                // A reply for a token the page has already moved past is dropped.
                if last_token.with_value(|last| !needs_verification(last.as_deref(), &token)) {
                    status.set(VerifyStatus::from_result(&result));
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, auth);
        }
    });

    view! {
        <div class="auth-page">
            <div class="auth-card auth-card--centered">
                {move || match status.get().message() {
                    None => view! { <p class="auth-message">"Verifying..."</p> }.into_any(),
                    Some((message, true)) => view! {
                        <p class="auth-message auth-message--success">{message}</p>
                        <a class="auth-button" href=ENTRY_ROUTE>"Go to login"</a>
                    }
                        .into_any(),
                    Some((message, false)) => {
                        view! { <p class="auth-message auth-message--error">{message}</p> }.into_any()
                    }
                }}
            </div>
        </div>
    }
}
