//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the auth session from the `AuthContext` provided by `App`
//! and are shared between the protected pages.

pub mod account_bar;
pub mod require_auth;
