//! Profile page listing the fields of the signed-in user's record.

use leptos::prelude::*;

use crate::components::account_bar::AccountBar;
use crate::state::auth::use_auth;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = use_auth();
    let fields = move || auth.session.with(|session| session.user().map(|u| u.display_fields()).unwrap_or_default());

    view! {
        <div class="profile-page">
            <AccountBar/>
            <main class="profile-page__body">
                <h1>"Profile"</h1>
                <dl class="profile-page__fields">
                    <For
                        each=fields
                        key=|(key, _)| key.clone()
                        children=move |(key, value)| view! {
                            <dt>{key}</dt>
                            <dd>{value}</dd>
                        }
                    />
                </dl>
            </main>
        </div>
    }
}
