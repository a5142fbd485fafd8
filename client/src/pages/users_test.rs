use super::*;

fn sample_form() -> UserForm {
    UserForm {
        user_id: " kuchan ".to_owned(),
        password: "secret".to_owned(),
        handle_name: "Kuchan".to_owned(),
        email: "kuchan@example.com".to_owned(),
        level: 3,
        is_active: true,
        must_change_password: false,
    }
}

#[test]
fn create_payload_trims_identity_fields() {
    let payload = user_create_payload(&sample_form());
    assert_eq!(
        payload,
        serde_json::json!({
            "user_id": "kuchan",
            "password": "secret",
            "handle_name": "Kuchan",
            "email": "kuchan@example.com",
            "level": 3,
            "is_active": true,
            "must_change_password_on_next_login": false,
        })
    );
}

#[test]
fn create_payload_nulls_blank_email() {
    let mut form = sample_form();
    form.email = "   ".to_owned();
    let payload = user_create_payload(&form);
    assert_eq!(payload["email"], serde_json::Value::Null);
}

#[test]
fn update_payload_omits_user_id_and_blank_password() {
    let mut form = sample_form();
    form.password = String::new();
    let payload = user_update_payload(&form);
    assert!(payload.get("user_id").is_none());
    assert!(payload.get("password").is_none());
    assert_eq!(payload["handle_name"], "Kuchan");
}

#[test]
fn update_payload_carries_password_when_set() {
    let payload = user_update_payload(&sample_form());
    assert_eq!(payload["password"], "secret");
}

#[test]
fn parse_level_clamps_to_backend_range() {
    assert_eq!(parse_level("5", 1), 5);
    assert_eq!(parse_level("12", 1), 9);
    assert_eq!(parse_level("-3", 1), 0);
    assert_eq!(parse_level(" 9 ", 1), 9);
}

#[test]
fn parse_level_keeps_fallback_on_garbage() {
    assert_eq!(parse_level("", 4), 4);
    assert_eq!(parse_level("abc", 2), 2);
}

#[test]
fn form_from_record_resets_password_and_maps_flags() {
    let record = crate::net::types::UserRecord {
        user_id: "sysop".to_owned(),
        handle_name: "System Operator".to_owned(),
        email: None,
        level: 9,
        is_active: false,
        must_change_password_on_next_login: true,
        last_login: None,
        created_at: None,
    };
    let form = UserForm::from_record(&record);
    assert_eq!(form.user_id, "sysop");
    assert!(form.password.is_empty());
    assert!(form.email.is_empty());
    assert!(!form.is_active);
    assert!(form.must_change_password);
}
