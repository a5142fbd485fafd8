//! System message templates and placeholder substitution for the MTBBS admin UI.
//!
//! This crate is UI-framework agnostic so client crates can consume it directly
//! for table rendering and preview substitution. Templates are free-text bodies
//! with `{name}` placeholders; substitution is a best-effort preview tool, not
//! a validated template engine, so malformed input always degrades to literal
//! text instead of failing.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A system message template as stored by the BBS backend.
///
/// `message_key` is unique and immutable after creation. `variables` holds the
/// declared substitutable names as a comma-separated string (the storage form);
/// use [`parse_variable_names`] to interpret it. Timestamps travel as ISO 8601
/// strings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SystemMessage {
    pub id: i64,
    pub message_key: String,
    pub message_name: String,
    /// Screen grouping: `"menu"`, `"greeting"`, `"info"`, or `"help"`.
    pub category: String,
    /// Template body with `{varname}` placeholders.
    pub content: String,
    pub description: Option<String>,
    /// Comma-separated declared variable names, e.g. `"version,time,user_id"`.
    pub variables: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

fn default_active() -> bool {
    true
}

/// The known template categories, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Menu,
    Greeting,
    Info,
    Help,
}

impl Category {
    pub const ALL: [Self; 4] = [Self::Menu, Self::Greeting, Self::Info, Self::Help];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Menu => "menu",
            Self::Greeting => "greeting",
            Self::Info => "info",
            Self::Help => "help",
        }
    }

    /// Parse a stored category string. Unknown values return `None`; callers
    /// render those verbatim rather than rejecting the record.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "menu" => Some(Self::Menu),
            "greeting" => Some(Self::Greeting),
            "info" => Some(Self::Info),
            "help" => Some(Self::Help),
            _ => None,
        }
    }
}

/// Split a stored comma-separated variable declaration into names.
///
/// Surrounding whitespace is trimmed from each entry and empty entries are
/// dropped; declaration order is preserved.
#[must_use]
pub fn parse_variable_names(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Substitute `{name}` placeholders in `content` with values from `bindings`.
///
/// Every literal occurrence of `{key}` for a bound key is replaced; names with
/// no binding are left as literal text. The input is scanned exactly once, so
/// a bound value that itself contains placeholder syntax is never re-expanded
/// and key iteration order cannot affect the output.
#[must_use]
pub fn render(content: &str, bindings: &BTreeMap<String, String>) -> String {
    let mut out = String::with_capacity(content.len());
    let mut rest = content;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open + 1..];
        let bound = tail
            .find('}')
            .and_then(|close| bindings.get(&tail[..close]).map(|value| (close, value)));
        match bound {
            Some((close, value)) => {
                out.push_str(value);
                rest = &tail[close + 1..];
            }
            None => {
                // Not a bound token: keep the brace and rescan right after it
                // so overlapping candidates like "{x{a}" still match "{a}".
                out.push('{');
                rest = tail;
            }
        }
    }

    out.push_str(rest);
    out
}

/// Build preview bindings for the declared variable names.
///
/// Known names get a canned example value; the `time` row uses the current
/// local clock. Any other name maps to the literal string `"{name}"` so the
/// preview visually signals an unbound variable.
#[must_use]
pub fn example_bindings(names: &[String]) -> BTreeMap<String, String> {
    let now = chrono::Local::now().format("%Y/%m/%d %H:%M:%S").to_string();
    example_bindings_at(names, &now)
}

/// Clock-free variant of [`example_bindings`] with an explicit `time` value.
#[must_use]
pub fn example_bindings_at(names: &[String], now: &str) -> BTreeMap<String, String> {
    names
        .iter()
        .map(|name| {
            let value = match name.as_str() {
                "version" => "4.0.0".to_owned(),
                "time" => now.to_owned(),
                "user_id" => "sysop".to_owned(),
                "handle" => "System Operator".to_owned(),
                "board_name" => "Info Board".to_owned(),
                other => format!("{{{other}}}"),
            };
            (name.clone(), value)
        })
        .collect()
}

/// Render a preview of `content` using example values for the variables
/// declared in the comma-separated string `declared`.
#[must_use]
pub fn preview(content: &str, declared: &str) -> String {
    render(content, &example_bindings(&parse_variable_names(declared)))
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
