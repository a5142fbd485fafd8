use super::*;

fn bindings(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect()
}

fn names(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|n| (*n).to_owned()).collect()
}

#[test]
fn render_substitutes_single_placeholder() {
    let out = render("hello {user_id}!", &bindings(&[("user_id", "sysop")]));
    assert_eq!(out, "hello sysop!");
}

#[test]
fn render_replaces_every_occurrence() {
    let out = render("{a}{a}", &bindings(&[("a", "x")]));
    assert_eq!(out, "xx");
}

#[test]
fn render_leaves_unbound_placeholders_literal() {
    assert_eq!(render("{unknown}", &bindings(&[])), "{unknown}");
    assert_eq!(
        render("{known} and {unknown}", &bindings(&[("known", "v")])),
        "v and {unknown}"
    );
}

#[test]
fn render_of_empty_content_is_empty() {
    assert_eq!(render("", &bindings(&[("a", "x")])), "");
}

#[test]
fn render_does_not_expand_placeholders_inside_bound_values() {
    let out = render("{a} {b}", &bindings(&[("a", "{b}"), ("b", "two")]));
    assert_eq!(out, "{b} two");
}

#[test]
fn render_is_idempotent_when_values_hold_no_placeholder_syntax() {
    let b = bindings(&[("version", "4.0.0"), ("handle", "System Operator")]);
    let once = render("MTBBS Ver {version} - {handle}", &b);
    assert_eq!(render(&once, &b), once);
}

#[test]
fn render_leaves_no_token_for_brace_free_bound_values() {
    let b = bindings(&[("version", "4.0.0"), ("time", "2025/01/01 00:00:00")]);
    let out = render("Ver {version} at {time}, again {version}", &b);
    assert!(!out.contains("{version}"));
    assert!(!out.contains("{time}"));
}

#[test]
fn render_handles_stray_and_nested_braces() {
    let b = bindings(&[("a", "x")]);
    assert_eq!(render("open { close", &b), "open { close");
    assert_eq!(render("{{a}", &b), "{x");
    assert_eq!(render("{x{a}", &b), "{xx");
    assert_eq!(render("} {a} {", &b), "} x {");
}

#[test]
fn render_passes_multibyte_text_through() {
    let b = bindings(&[("handle", "System Operator")]);
    let out = render("こんにちは {handle} さん", &b);
    assert_eq!(out, "こんにちは System Operator さん");
}

#[test]
fn example_bindings_use_canned_values_and_echo_unknown_names() {
    let b = example_bindings(&names(&["version", "foo"]));
    assert_eq!(b.get("version").map(String::as_str), Some("4.0.0"));
    assert_eq!(b.get("foo").map(String::as_str), Some("{foo}"));
    assert_eq!(b.len(), 2);
}

#[test]
fn example_bindings_at_pins_the_time_row() {
    let b = example_bindings_at(&names(&["time", "user_id", "handle", "board_name"]), "2025/06/01 12:34:56");
    assert_eq!(b.get("time").map(String::as_str), Some("2025/06/01 12:34:56"));
    assert_eq!(b.get("user_id").map(String::as_str), Some("sysop"));
    assert_eq!(b.get("handle").map(String::as_str), Some("System Operator"));
    assert_eq!(b.get("board_name").map(String::as_str), Some("Info Board"));
}

#[test]
fn parse_variable_names_trims_and_drops_empties() {
    assert_eq!(
        parse_variable_names("version, time ,user_id"),
        names(&["version", "time", "user_id"])
    );
    assert_eq!(parse_variable_names(""), Vec::<String>::new());
    assert_eq!(parse_variable_names(" , ,"), Vec::<String>::new());
    assert_eq!(parse_variable_names("handle"), names(&["handle"]));
}

#[test]
fn parse_variable_names_preserves_declaration_order() {
    assert_eq!(
        parse_variable_names("handle,greeting,handle"),
        names(&["handle", "greeting", "handle"])
    );
}

#[test]
fn preview_substitutes_declared_variables_only() {
    let out = preview("Ver {version} by {user_id}, see {undeclared}", "version,user_id");
    assert_eq!(out, "Ver 4.0.0 by sysop, see {undeclared}");
}

#[test]
fn preview_echoes_unknown_declared_names_as_their_own_placeholder() {
    let out = preview("Hi {greeting}", "greeting");
    assert_eq!(out, "Hi {greeting}");
}

#[test]
fn category_round_trips_known_values() {
    for category in Category::ALL {
        assert_eq!(Category::parse(category.as_str()), Some(category));
    }
    assert_eq!(Category::parse("chat"), None);
}

#[test]
fn system_message_deserializes_backend_payload() {
    let raw = r#"{
        "id": 1,
        "message_key": "MAIN_MENU",
        "message_name": "メインメニュー",
        "category": "menu",
        "content": "MTBBS Ver {version} - Main Menu\n{time}  {user_id} / {handle}",
        "description": "Main menu screen",
        "variables": "version,time,user_id,handle",
        "is_active": true,
        "created_at": "2025-01-15T09:30:00",
        "updated_at": "2025-01-20T18:00:00"
    }"#;
    let message: SystemMessage = serde_json::from_str(raw).expect("valid payload");
    assert_eq!(message.message_key, "MAIN_MENU");
    assert_eq!(Category::parse(&message.category), Some(Category::Menu));
    assert_eq!(
        parse_variable_names(message.variables.as_deref().unwrap_or_default()),
        names(&["version", "time", "user_id", "handle"])
    );
}

#[test]
fn system_message_defaults_is_active_when_omitted() {
    let raw = r#"{
        "id": 2,
        "message_key": "HELP_MESSAGE",
        "message_name": "Help",
        "category": "help",
        "content": "help text",
        "description": null,
        "variables": null
    }"#;
    let message: SystemMessage = serde_json::from_str(raw).expect("valid payload");
    assert!(message.is_active);
    assert_eq!(message.variables, None);
}
