//! REST API helpers for communicating with the auth backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): the transport reports `ApiError::Unavailable` since
//! these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. Transport failures and server
//! rejections are distinct variants, but pages are free to collapse them to a
//! single "failed" branch. Nothing here retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde_json::{Value, json};

use super::types::{ApiRequest, UserRecord};

/// Failure of a single API call.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server rejected request ({status})")]
    Rejected { status: u16, detail: Option<String> },
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Build a rejection from a non-2xx status and whatever body came back.
    #[must_use]
    pub fn rejected(status: u16, body: &str) -> Self {
        Self::Rejected { status, detail: rejection_detail(body) }
    }

    /// Human-readable detail supplied by the server, if any.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Rejected { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}

/// Pull a message out of a typical error body: `error`, `detail`, `message`,
/// or the first entry of `non_field_errors`.
fn rejection_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    for key in ["error", "detail", "message"] {
        if let Some(text) = value.get(key).and_then(Value::as_str) {
            return Some(text.to_owned());
        }
    }
    value
        .get("non_field_errors")
        .and_then(Value::as_array)
        .and_then(|errors| errors.first())
        .and_then(Value::as_str)
        .map(str::to_owned)
}

/// Decode a successful response body. Empty bodies decode to `Null`.
pub(crate) fn parse_body(text: &str) -> Result<Value, ApiError> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}

// =============================================================================
// ENDPOINTS
// =============================================================================

pub const CURRENT_USER_PATH: &str = "/api/user/";
pub const LOGIN_PATH: &str = "/api/auth/login/";
pub const REGISTER_PATH: &str = "/api/auth/register/";
pub const LOGOUT_PATH: &str = "/api/auth/logout/";
pub const REFRESH_TOKEN_PATH: &str = "/api/auth/refresh_token/";
pub const REQUEST_RESET_PATH: &str = "/api/reset-password/request_reset/";

fn verify_email_endpoint(token: &str) -> String {
    format!("/api/verify-email/{token}/")
}

fn reset_password_endpoint(token: &str) -> String {
    format!("/api/reset-password/{token}/")
}

fn credentials_request(path: &str, email: &str, password: &str) -> ApiRequest {
    ApiRequest::post(path).with_json(json!({ "email": email, "password": password }))
}

// =============================================================================
// TRANSPORT
// =============================================================================

/// Executes one request and yields the decoded JSON body of a 2xx response.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> Result<Value, ApiError>;
}

/// `fetch`-backed transport used by the running app.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

impl Transport for BrowserTransport {
    async fn send(&self, request: ApiRequest) -> Result<Value, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use super::types::Method;

            let transport_error = |e: gloo_net::Error| ApiError::Transport(e.to_string());
            let builder = match request.method {
                Method::Get => gloo_net::http::Request::get(&request.path),
                Method::Post => gloo_net::http::Request::post(&request.path),
            };
            let resp = match &request.body {
                Some(body) => builder.json(body).map_err(transport_error)?.send().await,
                None => builder.send().await,
            }
            .map_err(transport_error)?;
            let text = resp.text().await.map_err(transport_error)?;
            if !resp.ok() {
                return Err(ApiError::rejected(resp.status(), &text));
            }
            parse_body(&text)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Unavailable)
        }
    }
}

// =============================================================================
// AUTH API
// =============================================================================

/// Typed wrappers over the fixed auth endpoints.
#[derive(Clone, Copy, Debug, Default)]
pub struct AuthApi<T> {
    transport: T,
}

impl<T: Transport> AuthApi<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetch the currently authenticated user from `/api/user/`.
    ///
    /// `Ok(None)` means the server answered with an empty or `null` body.
    ///
    /// # Errors
    ///
    /// Any transport failure, non-2xx status, or non-object body.
    pub async fn fetch_current_user(&self) -> Result<Option<UserRecord>, ApiError> {
        let body = self.transport.send(ApiRequest::get(CURRENT_USER_PATH)).await?;
        if body.is_null() {
            return Ok(None);
        }
        serde_json::from_value(body).map(Some).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Post credentials to `/api/auth/login/` and return the payload as-is.
    ///
    /// # Errors
    ///
    /// Returns the transport or server error unchanged.
    pub async fn login(&self, email: &str, password: &str) -> Result<Value, ApiError> {
        self.transport.send(credentials_request(LOGIN_PATH, email, password)).await
    }

    /// Post credentials to `/api/auth/register/` and return the payload as-is.
    ///
    /// # Errors
    ///
    /// Returns the transport or server error unchanged.
    pub async fn register(&self, email: &str, password: &str) -> Result<Value, ApiError> {
        self.transport.send(credentials_request(REGISTER_PATH, email, password)).await
    }

    /// `POST /api/auth/logout/`.
    ///
    /// # Errors
    ///
    /// Returns the transport or server error unchanged.
    pub async fn logout(&self) -> Result<(), ApiError> {
        self.transport.send(ApiRequest::post(LOGOUT_PATH)).await.map(|_| ())
    }

    /// `POST /api/auth/refresh_token/`. The response body is ignored.
    ///
    /// # Errors
    ///
    /// Returns the transport or server error unchanged.
    pub async fn refresh_access_token(&self) -> Result<(), ApiError> {
        self.transport.send(ApiRequest::post(REFRESH_TOKEN_PATH)).await.map(|_| ())
    }

    /// `POST /api/verify-email/{token}/` with the route token untouched.
    ///
    /// # Errors
    ///
    /// Returns the transport or server error unchanged.
    pub async fn verify_email(&self, token: &str) -> Result<(), ApiError> {
        self.transport.send(ApiRequest::post(verify_email_endpoint(token))).await.map(|_| ())
    }

    /// Ask the server to email a password reset link.
    ///
    /// # Errors
    ///
    /// Returns the transport or server error unchanged.
    pub async fn request_password_reset(&self, email: &str) -> Result<Value, ApiError> {
        let request = ApiRequest::post(REQUEST_RESET_PATH).with_json(json!({ "email": email }));
        self.transport.send(request).await
    }

    /// Set a new password using the token from a reset link.
    ///
    /// # Errors
    ///
    /// Returns the transport or server error unchanged.
    pub async fn reset_password(
        &self,
        token: &str,
        new_password: &str,
        confirm_password: &str,
    ) -> Result<Value, ApiError> {
        let request = ApiRequest::post(reset_password_endpoint(token))
            .with_json(json!({ "new_password": new_password, "confirm_password": confirm_password }));
        self.transport.send(request).await
    }
}
