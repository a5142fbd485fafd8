//! Board-list state for the boards screen.

use crate::net::types::BoardRecord;

/// Shared board collection state backed by the admin REST API.
#[derive(Clone, Debug, Default)]
pub struct BoardsState {
    pub items: Vec<BoardRecord>,
    pub loading: bool,
    pub error: Option<String>,
}
