use super::*;

#[test]
fn translate_picks_the_requested_language() {
    assert_eq!(translate(Lang::En, "nav.users"), "Users");
    assert_eq!(translate(Lang::Ja, "nav.users"), "ユーザ");
}

#[test]
fn translate_echoes_unknown_keys() {
    assert_eq!(translate(Lang::En, "nav.missing"), "nav.missing");
    assert_eq!(translate(Lang::Ja, "nav.missing"), "nav.missing");
}

#[test]
fn japanese_is_the_default_language() {
    assert_eq!(Lang::default(), Lang::Ja);
    assert_eq!(read_preference(), Lang::Ja);
}

#[test]
fn codes_round_trip() {
    assert_eq!(Lang::from_code("en"), Some(Lang::En));
    assert_eq!(Lang::from_code("ja"), Some(Lang::Ja));
    assert_eq!(Lang::from_code("fr"), None);
    assert_eq!(Lang::from_code(Lang::En.code()), Some(Lang::En));
}

#[test]
fn every_table_row_has_english_text() {
    for (key, en, _) in TABLE {
        assert!(!en.is_empty(), "missing English text for {key}");
    }
}
