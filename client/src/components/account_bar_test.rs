use super::*;

#[test]
fn successful_logout_leaves_no_notice() {
    assert_eq!(logout_notice(&Ok(())), None);
}

#[test]
fn rejected_logout_shows_server_detail() {
    let err = ApiError::rejected(403, r#"{"detail":"CSRF Failed: token missing."}"#);
    assert_eq!(logout_notice(&Err(err)), Some("CSRF Failed: token missing.".to_owned()));
}

#[test]
fn rejected_logout_without_detail_falls_back() {
    let err = ApiError::rejected(500, "");
    assert_eq!(logout_notice(&Err(err)), Some(LOGOUT_FAILED.to_owned()));
}

#[test]
fn transport_failure_falls_back() {
    let err = ApiError::Transport("offline".to_owned());
    assert_eq!(logout_notice(&Err(err)), Some(LOGOUT_FAILED.to_owned()));
}
