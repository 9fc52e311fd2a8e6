//! # authgate-client
//!
//! Leptos + WASM front end for the account screens: login, registration,
//! password reset, email verification, and the two signed-in pages behind
//! the auth guard.
//!
//! All credential handling happens in the remote API. This crate holds the
//! session state machine (`state::auth`), the REST wrappers (`net`), and the
//! pages and components that render them.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs browser logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
