use super::*;

#[test]
fn validate_new_password_accepts_matching_long_password() {
    assert_eq!(validate_new_password("longenough", "longenough"), Ok(()));
}

#[test]
fn validate_new_password_enforces_minimum_length() {
    assert_eq!(validate_new_password("short", "short"), Err("Password must be at least 8 characters."));
    assert_eq!(validate_new_password("exactly8", "exactly8"), Ok(()));
}

#[test]
fn validate_new_password_counts_characters_not_bytes() {
    // 7 characters, 14 bytes.
    assert!(validate_new_password("ééééééé", "ééééééé").is_err());
}

#[test]
fn validate_new_password_rejects_mismatch() {
    assert_eq!(validate_new_password("longenough", "longenougH"), Err("Passwords do not match."));
}
