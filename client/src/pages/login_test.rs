use super::*;

#[test]
fn validate_login_input_trims_email() {
    assert_eq!(
        validate_login_input("  a@b.com  ", "pw"),
        Ok(("a@b.com".to_owned(), "pw".to_owned()))
    );
}

#[test]
fn validate_login_input_keeps_password_verbatim() {
    assert_eq!(
        validate_login_input("a@b.com", " spaced pw "),
        Ok(("a@b.com".to_owned(), " spaced pw ".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("   ", "pw"), Err("Enter your email."));
    assert_eq!(validate_login_input("a@b.com", ""), Err("Enter your password."));
}
