//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its form and result signals and calls at most one auth
//! endpoint per user action. Protected pages are wrapped in `RequireAuth`
//! by the router rather than checking the session themselves.

pub mod dashboard;
pub mod forgot_password;
pub mod login;
pub mod profile;
pub mod register;
pub mod reset_password;
pub mod verify_email;
