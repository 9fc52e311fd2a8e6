use super::*;

#[test]
fn from_result_success_is_verified() {
    assert_eq!(VerifyStatus::from_result(&Ok(())), VerifyStatus::Verified);
}

#[test]
fn from_result_any_failure_is_failed() {
    assert_eq!(VerifyStatus::from_result(&Err(ApiError::rejected(400, ""))), VerifyStatus::Failed);
    assert_eq!(
        VerifyStatus::from_result(&Err(ApiError::Transport("offline".to_owned()))),
        VerifyStatus::Failed
    );
}

#[test]
fn verified_shows_success_and_login_link_only() {
    let (message, link) = VerifyStatus::Verified.message().unwrap();
    assert_eq!(message, VERIFIED_MESSAGE);
    assert!(link);
    assert_ne!(message, INVALID_TOKEN_MESSAGE);
}

#[test]
fn failed_shows_error_without_link() {
    let (message, link) = VerifyStatus::Failed.message().unwrap();
    assert_eq!(message, INVALID_TOKEN_MESSAGE);
    assert!(!link);
}

#[test]
fn pending_shows_neither_branch() {
    assert_eq!(VerifyStatus::Pending.message(), None);
}

#[test]
fn first_token_needs_verification() {
    assert!(needs_verification(None, "abc123"));
}

#[test]
fn same_token_is_not_sent_twice() {
    assert!(!needs_verification(Some("abc123"), "abc123"));
}

#[test]
fn changed_token_is_sent_again() {
    assert!(needs_verification(Some("abc123"), "def456"));
}
