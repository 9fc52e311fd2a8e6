//! Form feedback helpers shared by the auth pages.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use serde_json::Value;

use crate::net::api::ApiError;

/// Message for a failed call: the server's detail when it sent one,
/// otherwise `fallback`.
#[must_use]
pub fn failure_message(err: &ApiError, fallback: &str) -> String {
    err.detail().unwrap_or(fallback).to_owned()
}

/// The payload's `message` string, or `fallback`.
#[must_use]
pub fn payload_message(payload: &Value, fallback: &str) -> String {
    payload.get("message").and_then(Value::as_str).unwrap_or(fallback).to_owned()
}

/// Trimmed copy of `value`, or `None` if nothing is left.
#[must_use]
pub fn required(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}
