//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds only immutable settings and one pooled HTTP client for the upstream
//! API, so cloning is cheap and handlers never contend on it.

use std::sync::Arc;

use crate::config::HostConfig;

#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    pub upstream: Arc<str>,
    pub max_body_bytes: usize,
}

impl AppState {
    /// Build state for the given config.
    ///
    /// The client never follows redirects: 3xx answers from the API are
    /// relayed to the browser unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialised.
    pub fn new(config: &HostConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().redirect(reqwest::redirect::Policy::none()).build()?;
        Ok(Self { http, upstream: Arc::from(config.api_upstream.as_str()), max_body_bytes: config.max_body_bytes })
    }
}
