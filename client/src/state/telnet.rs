//! Live telnet monitor state for the connections screen.

use crate::net::types::{TelnetConnectionList, TelnetStats};

/// Connection list plus aggregated counters, refreshed together by the
/// connections page poll loop.
#[derive(Clone, Debug, Default)]
pub struct TelnetState {
    pub connections: TelnetConnectionList,
    pub stats: TelnetStats,
    pub loading: bool,
    pub error: Option<String>,
}
