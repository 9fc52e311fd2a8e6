use super::*;

#[test]
fn greeting_uses_email_when_present() {
    assert_eq!(greeting(Some("a@b.com")), "Welcome back, a@b.com.");
}

#[test]
fn greeting_without_email() {
    assert_eq!(greeting(None), "Welcome back.");
}
