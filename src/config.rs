//! Upstream service configuration from the environment.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

const DEFAULT_ADMIN_API_URL: &str = "http://127.0.0.1:8000";
const DEFAULT_MONITOR_API_URL: &str = "http://127.0.0.1:8001";

/// Base URLs of the two external collaborators the dashboard proxies to:
/// the BBS admin backend and the telnet monitor service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpstreamConfig {
    pub admin_base: String,
    pub monitor_base: String,
}

impl UpstreamConfig {
    /// Read `ADMIN_API_URL` / `MONITOR_API_URL`, falling back to the local
    /// development defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            admin_base: trim_base(&env_or("ADMIN_API_URL", DEFAULT_ADMIN_API_URL)),
            monitor_base: trim_base(&env_or("MONITOR_API_URL", DEFAULT_MONITOR_API_URL)),
        }
    }

    /// Pick the upstream for a request path. Telnet monitor routes live under
    /// `/api/telnet`; everything else belongs to the admin backend.
    #[must_use]
    pub fn select_base(&self, path: &str) -> &str {
        if path == "/api/telnet" || path.starts_with("/api/telnet/") {
            &self.monitor_base
        } else {
            &self.admin_base
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Normalize a configured base URL so joining never produces `//api/...`.
fn trim_base(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}
