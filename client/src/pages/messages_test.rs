use super::*;

fn sample_message(key: &str, category: &str) -> SystemMessage {
    SystemMessage {
        id: 1,
        message_key: key.to_owned(),
        message_name: key.to_owned(),
        category: category.to_owned(),
        content: "MTBBS Ver {version}".to_owned(),
        description: None,
        variables: Some("version".to_owned()),
        is_active: true,
        created_at: None,
        updated_at: None,
    }
}

fn sample_form() -> MessageForm {
    MessageForm {
        message_key: " MAIN_MENU ".to_owned(),
        message_name: "メインメニュー".to_owned(),
        category: "menu".to_owned(),
        description: String::new(),
        variables: "version,time,user_id,handle".to_owned(),
        content: "MTBBS Ver {version} - Main Menu\n{time}  {user_id} / {handle}".to_owned(),
        is_active: true,
    }
}

#[test]
fn create_payload_trims_key_and_nulls_blank_description() {
    let payload = message_create_payload(&sample_form());
    assert_eq!(payload["message_key"], "MAIN_MENU");
    assert_eq!(payload["description"], serde_json::Value::Null);
    assert_eq!(payload["variables"], "version,time,user_id,handle");
    assert_eq!(payload["is_active"], true);
}

#[test]
fn update_payload_leaves_the_key_to_the_path() {
    let payload = message_update_payload(&sample_form());
    assert!(payload.get("message_key").is_none());
    assert_eq!(payload["category"], "menu");
}

#[test]
fn content_is_sent_verbatim_with_placeholders_intact() {
    let payload = message_create_payload(&sample_form());
    assert_eq!(
        payload["content"],
        "MTBBS Ver {version} - Main Menu\n{time}  {user_id} / {handle}"
    );
}

#[test]
fn filter_messages_passes_all_or_matches_category() {
    let items = vec![
        sample_message("MAIN_MENU", "menu"),
        sample_message("OPENING_MESSAGE", "greeting"),
        sample_message("HELP_MESSAGE", "help"),
    ];
    assert_eq!(filter_messages(&items, "all").len(), 3);
    let menus = filter_messages(&items, "menu");
    assert_eq!(menus.len(), 1);
    assert_eq!(menus[0].message_key, "MAIN_MENU");
    assert!(filter_messages(&items, "info").is_empty());
}

#[test]
fn category_chip_class_maps_known_categories() {
    assert_eq!(category_chip_class("menu"), "chip chip--primary");
    assert_eq!(category_chip_class("greeting"), "chip chip--success");
    assert_eq!(category_chip_class("info"), "chip chip--info");
    assert_eq!(category_chip_class("help"), "chip chip--warning");
    assert_eq!(category_chip_class("weird"), "chip");
}

#[test]
fn form_from_record_flattens_optional_fields() {
    let mut record = sample_message("LOGIN_MESSAGE", "greeting");
    record.description = Some("ログイン時の挨拶".to_owned());
    record.variables = None;
    let form = MessageForm::from_record(&record);
    assert_eq!(form.description, "ログイン時の挨拶");
    assert!(form.variables.is_empty());
    assert_eq!(form.category, "greeting");
}
