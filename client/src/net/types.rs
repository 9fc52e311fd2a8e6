//! Wire types shared by the REST helpers and the auth state.
//!
//! DESIGN
//! ======
//! The user record is whatever JSON object the API hands back. The client
//! never assumes a schema beyond reading a couple of well-known keys for
//! display, so the record stays an untyped map.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// HTTP method for an outgoing API call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// A fully-described API call: method, absolute path, optional JSON body.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

impl ApiRequest {
    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self { method: Method::Get, path: path.into(), body: None }
    }

    #[must_use]
    pub fn post(path: impl Into<String>) -> Self {
        Self { method: Method::Post, path: path.into(), body: None }
    }

    #[must_use]
    pub fn with_json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// The authenticated user as returned by `GET /api/user/`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserRecord(pub Map<String, Value>);

impl UserRecord {
    /// Raw field lookup.
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// The user's email, when the API includes one as a string.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.field("email").and_then(Value::as_str)
    }

    /// Every field rendered as `(key, text)`, sorted by key.
    ///
    /// Strings render without quotes, `null` renders as `"-"`, everything
    /// else uses compact JSON.
    #[must_use]
    pub fn display_fields(&self) -> Vec<(String, String)> {
        let mut fields: Vec<(String, String)> =
            self.0.iter().map(|(key, value)| (key.clone(), display_value(value))).collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));
        fields
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::Null => "-".to_owned(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
