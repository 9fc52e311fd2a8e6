//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The only app-wide state is the auth session; pages keep their form and
//! result fields in local signals.

pub mod auth;
