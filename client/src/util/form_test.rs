use super::*;
use serde_json::json;

#[test]
fn failure_message_prefers_server_detail() {
    let err = ApiError::rejected(400, r#"{"error":"Token has expired"}"#);
    assert_eq!(failure_message(&err, "Something went wrong."), "Token has expired");
}

#[test]
fn failure_message_falls_back_for_transport_errors() {
    let err = ApiError::Transport("offline".to_owned());
    assert_eq!(failure_message(&err, "Something went wrong."), "Something went wrong.");
}

#[test]
fn payload_message_reads_message_field() {
    assert_eq!(payload_message(&json!({ "message": "Check your inbox" }), "fallback"), "Check your inbox");
    assert_eq!(payload_message(&json!({ "message": 3 }), "fallback"), "fallback");
    assert_eq!(payload_message(&serde_json::Value::Null, "fallback"), "fallback");
}

#[test]
fn required_trims_and_rejects_blank() {
    assert_eq!(required("  a@b.com "), Some("a@b.com".to_owned()));
    assert_eq!(required("   "), None);
    assert_eq!(required(""), None);
}
