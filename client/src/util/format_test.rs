use super::*;

#[test]
fn format_timestamp_accepts_rfc3339() {
    assert_eq!(
        format_timestamp("2025-02-01T21:15:00+09:00"),
        "2025/02/01 21:15:00"
    );
}

#[test]
fn format_timestamp_accepts_naive_backend_datetimes() {
    assert_eq!(format_timestamp("2025-02-01T21:15:00"), "2025/02/01 21:15:00");
    assert_eq!(
        format_timestamp("2025-02-01T21:15:00.123456"),
        "2025/02/01 21:15:00"
    );
}

#[test]
fn format_timestamp_passes_garbage_through() {
    assert_eq!(format_timestamp("not a date"), "not a date");
    assert_eq!(format_timestamp(""), "");
}

#[test]
fn format_timestamp_or_uses_placeholder_for_none() {
    assert_eq!(format_timestamp_or(None, "Never"), "Never");
    assert_eq!(
        format_timestamp_or(Some("2025-02-01T21:15:00"), "Never"),
        "2025/02/01 21:15:00"
    );
}

#[test]
fn level_label_formats() {
    assert_eq!(level_label(9), "Level 9");
    assert_eq!(level_label(0), "Level 0");
}
