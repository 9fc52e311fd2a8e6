use std::sync::Mutex;

use super::*;

/// Serializes the tests below that read or write the process environment.
static ENV_LOCK: Mutex<()> = Mutex::new(());

/// # Safety
/// Tests touching the process environment must not run concurrently with
/// other tests that read the same variables.
unsafe fn clear_host_env() {
    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("API_UPSTREAM_URL");
        std::env::remove_var("API_PROXY_MAX_BODY_BYTES");
    }
}

#[test]
fn from_env_defaults() {
    let _guard = ENV_LOCK.lock().unwrap();
    unsafe { clear_host_env() };

    let cfg = HostConfig::from_env().unwrap();
    assert_eq!(
        cfg,
        HostConfig {
            port: DEFAULT_PORT,
            api_upstream: DEFAULT_API_UPSTREAM_URL.to_owned(),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    );
}

#[test]
fn from_env_rejects_invalid_values() {
    let _guard = ENV_LOCK.lock().unwrap();
    unsafe {
        clear_host_env();
        std::env::set_var("PORT", "not-a-port");
    }
    assert_eq!(HostConfig::from_env(), Err(ConfigError::Port("not-a-port".to_owned())));

    unsafe {
        clear_host_env();
        std::env::set_var("API_PROXY_MAX_BODY_BYTES", "0");
    }
    assert_eq!(HostConfig::from_env(), Err(ConfigError::MaxBodyBytes("0".to_owned())));

    unsafe { clear_host_env() };
}

#[test]
fn parse_port_accepts_number_and_rejects_garbage() {
    assert_eq!(parse_port(Some("8080")), Ok(8080));
    assert_eq!(parse_port(Some(" 8080 ")), Ok(8080));
    assert_eq!(parse_port(Some("http")), Err(ConfigError::Port("http".to_owned())));
    assert_eq!(parse_port(Some("70000")), Err(ConfigError::Port("70000".to_owned())));
}

#[test]
fn parse_upstream_trims_trailing_slash() {
    assert_eq!(parse_upstream(Some("https://api.example.test/")), Ok("https://api.example.test".to_owned()));
    assert_eq!(parse_upstream(None), Ok("http://127.0.0.1:8000".to_owned()));
}

#[test]
fn parse_upstream_requires_http_scheme() {
    assert_eq!(
        parse_upstream(Some("api.example.test")),
        Err(ConfigError::UpstreamUrl("api.example.test".to_owned()))
    );
}

#[test]
fn parse_max_body_bytes_rejects_zero_and_garbage() {
    assert_eq!(parse_max_body_bytes(Some("2048")), Ok(2048));
    assert!(parse_max_body_bytes(Some("0")).is_err());
    assert!(parse_max_body_bytes(Some("lots")).is_err());
}
