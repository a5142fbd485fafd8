use super::*;

#[test]
fn user_endpoint_embeds_user_id() {
    assert_eq!(admin_user_endpoint("sysop"), "/api/admin/users/sysop");
}

#[test]
fn board_endpoint_embeds_board_id() {
    assert_eq!(admin_board_endpoint(7), "/api/admin/boards/7");
}

#[test]
fn message_endpoint_embeds_message_key() {
    assert_eq!(
        admin_message_endpoint("MAIN_MENU"),
        "/api/admin/messages/MAIN_MENU"
    );
}

#[test]
fn messages_endpoint_appends_category_filter_only_when_present() {
    assert_eq!(admin_messages_endpoint(None), "/api/admin/messages");
    assert_eq!(
        admin_messages_endpoint(Some("greeting")),
        "/api/admin/messages?category=greeting"
    );
}

#[test]
fn request_failed_message_includes_status() {
    assert_eq!(request_failed_message(502), "request failed: 502");
}
