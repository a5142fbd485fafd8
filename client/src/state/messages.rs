//! System-message template state for the messages screen.

use crate::net::types::SystemMessage;

/// Shared template collection state backed by the admin REST API.
///
/// The category filter is applied client-side so switching it never triggers
/// a refetch; the poll loop keeps the full collection current.
#[derive(Clone, Debug, Default)]
pub struct MessagesState {
    pub items: Vec<SystemMessage>,
    pub loading: bool,
    pub error: Option<String>,
}
