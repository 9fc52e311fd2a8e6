//! Root application component with routing and the auth context provider.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::require_auth::RequireAuth;
use crate::pages::{
    dashboard::DashboardPage, forgot_password::ForgotPasswordPage, login::LoginPage, profile::ProfilePage,
    register::RegisterPage, reset_password::ResetPasswordPage, verify_email::VerifyEmailPage,
};
use crate::state::auth::AuthContext;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the auth session for the app's lifetime, starts the one-shot session
/// fetch on mount, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = AuthContext::new();
    provide_context(auth);

    // Effects only run in the browser; the server always renders `Pending`.
    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(auth.load_session());
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/authgate.css"/>
        <Title text="Authgate"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("forgot-password") view=ForgotPasswordPage/>
                <Route path=(StaticSegment("reset-password"), ParamSegment("token")) view=ResetPasswordPage/>
                <Route path=(StaticSegment("verify-email"), ParamSegment("token")) view=VerifyEmailPage/>
                <Route path=StaticSegment("dashboard") view=ProtectedDashboard/>
                <Route path=StaticSegment("profile") view=ProtectedProfile/>
            </Routes>
        </Router>
    }
}

#[component]
fn ProtectedDashboard() -> impl IntoView {
    view! {
        <RequireAuth>
            <DashboardPage/>
        </RequireAuth>
    }
}

#[component]
fn ProtectedProfile() -> impl IntoView {
    view! {
        <RequireAuth>
            <ProfilePage/>
        </RequireAuth>
    }
}
