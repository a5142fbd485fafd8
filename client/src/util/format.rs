//! Display formatting for wire timestamps and level values.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

const DISPLAY_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Render an ISO 8601 timestamp for table display.
///
/// The backend emits naive local datetimes while the monitor may include an
/// offset; both forms are accepted. Unparseable input is shown verbatim so a
/// backend format drift never blanks a column.
#[must_use]
pub fn format_timestamp(raw: &str) -> String {
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
        return dt.format(DISPLAY_FORMAT).to_string();
    }
    if let Ok(naive) = chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return naive.format(DISPLAY_FORMAT).to_string();
    }
    raw.to_owned()
}

/// Render an optional timestamp, falling back to the given placeholder.
#[must_use]
pub fn format_timestamp_or(raw: Option<&str>, placeholder: &str) -> String {
    match raw {
        Some(value) => format_timestamp(value),
        None => placeholder.to_owned(),
    }
}

/// Chip label for a user level.
#[must_use]
pub fn level_label(level: i64) -> String {
    format!("Level {level}")
}
