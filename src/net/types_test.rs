use super::*;

// =============================================================
// Wire format: the server expects camelCase keys
// =============================================================

#[test]
fn signup_request_serializes_with_camel_case_keys() {
    let req = SignupRequest {
        user_id: "alice".to_owned(),
        password: "Abc12!".to_owned(),
        email: "alice@example.com".to_owned(),
    };
    let value = serde_json::to_value(&req).expect("serialize");
    assert_eq!(
        value,
        serde_json::json!({
            "userId": "alice",
            "password": "Abc12!",
            "email": "alice@example.com",
        })
    );
}

#[test]
fn login_request_has_no_email_field() {
    let req = LoginRequest {
        user_id: "alice".to_owned(),
        password: "Abc12!".to_owned(),
    };
    let value = serde_json::to_value(&req).expect("serialize");
    assert_eq!(
        value,
        serde_json::json!({
            "userId": "alice",
            "password": "Abc12!",
        })
    );
}
