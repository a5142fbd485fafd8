//! User-list state for the users screen.

use crate::net::types::UserRecord;

/// Shared user collection state backed by the admin REST API.
#[derive(Clone, Debug, Default)]
pub struct UsersState {
    pub items: Vec<UserRecord>,
    pub loading: bool,
    pub error: Option<String>,
}
