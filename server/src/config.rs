//! Host configuration parsed from environment variables.

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_API_UPSTREAM_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    Port(String),
    #[error("API_UPSTREAM_URL must start with http:// or https://, got {0:?}")]
    UpstreamUrl(String),
    #[error("invalid API_PROXY_MAX_BODY_BYTES: {0}")]
    MaxBodyBytes(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    /// Base URL of the auth API, without a trailing slash.
    pub api_upstream: String,
    pub max_body_bytes: usize,
}

impl HostConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `API_UPSTREAM_URL`: default `http://127.0.0.1:8000`
    /// - `API_PROXY_MAX_BODY_BYTES`: default 1 MiB
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a variable is set but invalid: a `PORT`
    /// that is not a `u16`, an `API_UPSTREAM_URL` without an `http(s)://`
    /// scheme, or an `API_PROXY_MAX_BODY_BYTES` that is zero or not a number.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            port: parse_port(std::env::var("PORT").ok().as_deref())?,
            api_upstream: parse_upstream(std::env::var("API_UPSTREAM_URL").ok().as_deref())?,
            max_body_bytes: parse_max_body_bytes(std::env::var("API_PROXY_MAX_BODY_BYTES").ok().as_deref())?,
        })
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw {
        None => Ok(DEFAULT_PORT),
        Some(value) => value.trim().parse().map_err(|_| ConfigError::Port(value.to_owned())),
    }
}

fn parse_upstream(raw: Option<&str>) -> Result<String, ConfigError> {
    let value = raw.unwrap_or(DEFAULT_API_UPSTREAM_URL).trim();
    if !(value.starts_with("http://") || value.starts_with("https://")) {
        return Err(ConfigError::UpstreamUrl(value.to_owned()));
    }
    Ok(value.trim_end_matches('/').to_owned())
}

fn parse_max_body_bytes(raw: Option<&str>) -> Result<usize, ConfigError> {
    match raw {
        None => Ok(DEFAULT_MAX_BODY_BYTES),
        Some(value) => match value.trim().parse::<usize>() {
            Ok(0) | Err(_) => Err(ConfigError::MaxBodyBytes(value.to_owned())),
            Ok(n) => Ok(n),
        },
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
