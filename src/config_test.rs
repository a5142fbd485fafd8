use super::*;

fn config() -> UpstreamConfig {
    UpstreamConfig {
        admin_base: "http://backend:8000".to_owned(),
        monitor_base: "http://monitor:8001".to_owned(),
    }
}

#[test]
fn telnet_paths_route_to_the_monitor() {
    let cfg = config();
    assert_eq!(cfg.select_base("/api/telnet/connections"), "http://monitor:8001");
    assert_eq!(cfg.select_base("/api/telnet/stats"), "http://monitor:8001");
    assert_eq!(cfg.select_base("/api/telnet"), "http://monitor:8001");
}

#[test]
fn admin_paths_route_to_the_backend() {
    let cfg = config();
    assert_eq!(cfg.select_base("/api/admin/users"), "http://backend:8000");
    assert_eq!(cfg.select_base("/api/admin/stats"), "http://backend:8000");
    // Prefix must match a full segment, not a substring.
    assert_eq!(cfg.select_base("/api/telnetish"), "http://backend:8000");
}

#[test]
fn trim_base_strips_trailing_slashes_and_whitespace() {
    assert_eq!(trim_base("http://backend:8000/"), "http://backend:8000");
    assert_eq!(trim_base(" http://backend:8000// "), "http://backend:8000");
    assert_eq!(trim_base("http://backend:8000"), "http://backend:8000");
}
