//! Reverse proxy for `/api/*`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser only ever talks to this host. Forwarding the API through the
//! same origin keeps its httpOnly session cookies first-party, so the client
//! needs no CORS or credential configuration.
//!
//! Requests are relayed as-is (method, path, query, body, end-to-end headers)
//! and the upstream response comes back with its status, headers, and body.
//! No retries.

use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::header::{self, HeaderMap, HeaderName};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("request body unreadable or over limit: {0}")]
    RequestBody(String),
    #[error("upstream unreachable: {0}")]
    Upstream(String),
    #[error("upstream response unreadable: {0}")]
    UpstreamBody(String),
}

impl ProxyError {
    fn status(&self) -> StatusCode {
        match self {
            Self::RequestBody(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Upstream(_) | Self::UpstreamBody(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = serde_json::json!({ "error": self.to_string() });
        (status, axum::Json(body)).into_response()
    }
}

/// Headers that describe a single connection and must not be forwarded.
pub(crate) fn is_hop_by_hop(name: &HeaderName) -> bool {
    matches!(
        name.as_str(),
        "connection"
            | "keep-alive"
            | "proxy-authenticate"
            | "proxy-authorization"
            | "te"
            | "trailer"
            | "transfer-encoding"
            | "upgrade"
    )
}

/// Extra hop-by-hop names a message declares in its `Connection` header.
/// Tokens that are not valid header names are ignored.
pub(crate) fn connection_listed(src: &HeaderMap) -> Vec<HeaderName> {
    src.get_all(header::CONNECTION)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(','))
        .filter_map(|token| HeaderName::from_bytes(token.trim().as_bytes()).ok())
        .collect()
}

/// End-to-end request headers. `Host` and `Content-Length` are rebuilt by
/// the outgoing client.
pub(crate) fn request_headers(src: &HeaderMap) -> HeaderMap {
    let listed = connection_listed(src);
    filter_headers(src, |name| {
        !is_hop_by_hop(name) && !listed.contains(name) && *name != header::HOST && *name != header::CONTENT_LENGTH
    })
}

pub(crate) fn response_headers(src: &HeaderMap) -> HeaderMap {
    let listed = connection_listed(src);
    filter_headers(src, |name| !is_hop_by_hop(name) && !listed.contains(name))
}

fn filter_headers(src: &HeaderMap, keep: impl Fn(&HeaderName) -> bool) -> HeaderMap {
    let mut out = HeaderMap::with_capacity(src.len());
    for (name, value) in src {
        if keep(name) {
            out.append(name.clone(), value.clone());
        }
    }
    out
}

/// Join the upstream base (no trailing slash) with the incoming path + query.
pub(crate) fn upstream_url(base: &str, path_and_query: &str) -> String {
    format!("{base}{path_and_query}")
}

/// `ANY /api/{*path}`: forward to the configured upstream.
pub async fn forward(State(state): State<AppState>, request: Request) -> Result<Response, ProxyError> {
    let (parts, body) = request.into_parts();
    let path_and_query = parts.uri.path_and_query().map_or_else(|| parts.uri.path(), |pq| pq.as_str());
    let url = upstream_url(&state.upstream, path_and_query);

    let body = axum::body::to_bytes(body, state.max_body_bytes)
        .await
        .map_err(|e| ProxyError::RequestBody(e.to_string()))?;

    let upstream = state
        .http
        .request(parts.method.clone(), &url)
        .headers(request_headers(&parts.headers))
        .body(body)
        .send()
        .await
        .map_err(|e| {
            tracing::warn!(method = %parts.method, path = parts.uri.path(), error = %e, "upstream request failed");
            ProxyError::Upstream(e.to_string())
        })?;

    let status = upstream.status();
    let headers = response_headers(upstream.headers());
    let bytes = upstream.bytes().await.map_err(|e| ProxyError::UpstreamBody(e.to_string()))?;
    tracing::debug!(method = %parts.method, path = parts.uri.path(), %status, "proxied");

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    *response.headers_mut() = headers;
    Ok(response)
}

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;
