use super::*;

fn sample_form() -> BoardForm {
    BoardForm {
        board_id: 3,
        name: " General ".to_owned(),
        description: "雑談ボード".to_owned(),
        read_level: 0,
        write_level: 1,
    }
}

#[test]
fn create_payload_includes_board_id() {
    let payload = board_create_payload(&sample_form());
    assert_eq!(
        payload,
        serde_json::json!({
            "board_id": 3,
            "name": "General",
            "description": "雑談ボード",
            "read_level": 0,
            "write_level": 1,
        })
    );
}

#[test]
fn update_payload_leaves_board_id_to_the_path() {
    let payload = board_update_payload(&sample_form());
    assert!(payload.get("board_id").is_none());
    assert_eq!(payload["name"], "General");
}

#[test]
fn blank_description_becomes_null() {
    let mut form = sample_form();
    form.description = "  ".to_owned();
    assert_eq!(
        board_create_payload(&form)["description"],
        serde_json::Value::Null
    );
}

#[test]
fn parse_number_floors_at_zero_and_keeps_fallback() {
    assert_eq!(parse_number("7", 0), 7);
    assert_eq!(parse_number("-2", 0), 0);
    assert_eq!(parse_number("x", 5), 5);
    assert_eq!(parse_number(" 12 ", 0), 12);
}

#[test]
fn form_from_record_maps_missing_description_to_empty() {
    let record = crate::net::types::BoardRecord {
        board_id: 9,
        name: "Info Board".to_owned(),
        description: None,
        read_level: 0,
        write_level: 9,
        is_active: true,
    };
    let form = BoardForm::from_record(&record);
    assert_eq!(form.board_id, 9);
    assert!(form.description.is_empty());
    assert_eq!(form.write_level, 9);
}
