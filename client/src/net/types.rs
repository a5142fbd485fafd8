//! Wire DTOs for the admin backend and telnet monitor APIs.
//!
//! DESIGN
//! ======
//! These types intentionally mirror the backend response payloads so serde
//! round-trips stay lossless. Timestamps travel as ISO 8601 strings and are
//! formatted for display by `util::format`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub use sysmsg::{Category, SystemMessage};

/// A BBS user account as returned by `/api/admin/users`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Login identifier, unique and immutable after creation.
    pub user_id: String,
    /// Display name shown on boards and in chat.
    pub handle_name: String,
    pub email: Option<String>,
    /// Access level 0-9; 9 is sysop.
    pub level: i64,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub must_change_password_on_next_login: bool,
    /// ISO 8601 timestamp of the most recent login, if any.
    pub last_login: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// A message board as returned by `/api/admin/boards`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardRecord {
    /// Numeric board identifier chosen by the operator.
    pub board_id: i64,
    pub name: String,
    pub description: Option<String>,
    /// Minimum user level required to read.
    pub read_level: i64,
    /// Minimum user level required to post.
    pub write_level: i64,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// Aggregate counters from `/api/admin/stats`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SystemStats {
    #[serde(default)]
    pub active_users: i64,
    #[serde(default)]
    pub total_users: i64,
    #[serde(default)]
    pub total_boards: i64,
    #[serde(default)]
    pub total_messages: i64,
    #[serde(default)]
    pub telnet_connections: i64,
}

/// One live telnet session from `/api/telnet/connections`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TelnetConnection {
    /// Connection identifier assigned by the telnet server.
    pub client_id: String,
    pub user_id: String,
    pub handle_name: String,
    pub level: i64,
    /// Whether login completed; guests stay unauthenticated.
    pub authenticated: bool,
    /// ISO 8601 timestamp of the connect.
    pub connected_at: String,
}

/// Envelope for the live connection list.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TelnetConnectionList {
    #[serde(default)]
    pub connections: Vec<TelnetConnection>,
    #[serde(default)]
    pub total: i64,
    pub last_updated: Option<String>,
}

/// Aggregated telnet counters from `/api/telnet/stats`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TelnetStats {
    #[serde(default)]
    pub total_connections: i64,
    #[serde(default)]
    pub authenticated_users: i64,
    #[serde(default)]
    pub guest_users: i64,
    /// Connection count keyed by user level (JSON object keys are strings).
    #[serde(default)]
    pub level_distribution: BTreeMap<String, i64>,
    pub last_updated: Option<String>,
}

fn default_true() -> bool {
    true
}
