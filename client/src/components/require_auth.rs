//! Route guard wrapping protected pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! `/dashboard` and `/profile` render through this component. It only
//! observes the session; transitions happen in `state::auth`.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::hooks::use_navigate;

use crate::state::auth::{GuardDecision, guard, use_auth};
use crate::util::auth::install_guard_redirect;

/// Placeholder shown while the initial session fetch is in flight.
#[component]
pub fn LoadingPlaceholder() -> impl IntoView {
    view! { <div class="auth-loading">"Loading..."</div> }
}

/// Renders `children` only for an authenticated session.
///
/// Pending sessions show `LoadingPlaceholder`; anonymous sessions render
/// nothing and are redirected to the entry route with history replaced.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    install_guard_redirect(auth.session, use_navigate());

    move || match guard(&auth.session.get()) {
        GuardDecision::Wait => view! { <LoadingPlaceholder/> }.into_any(),
        GuardDecision::Redirect(_) => ().into_any(),
        GuardDecision::Render => children().into_any(),
    }
}
