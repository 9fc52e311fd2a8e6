//! Networking modules for the auth REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps the fixed auth endpoints behind a `Transport` seam and `types`
//! defines the request/record shapes they exchange.

pub mod api;
pub mod types;

#[cfg(test)]
pub(crate) mod fake_transport;
