//! Dashboard statistics state.

use crate::net::types::SystemStats;

/// Aggregate counters shown on the dashboard landing page.
#[derive(Clone, Debug, Default)]
pub struct StatsState {
    pub stats: SystemStats,
    pub loading: bool,
    pub error: Option<String>,
}
