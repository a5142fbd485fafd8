use super::*;

#[test]
fn upstream_url_joins_base_path_and_query() {
    assert_eq!(
        upstream_url("http://backend:8000", "/api/admin/messages", Some("category=menu")),
        "http://backend:8000/api/admin/messages?category=menu"
    );
}

#[test]
fn upstream_url_drops_absent_or_empty_query() {
    assert_eq!(
        upstream_url("http://backend:8000", "/api/admin/users", None),
        "http://backend:8000/api/admin/users"
    );
    assert_eq!(
        upstream_url("http://backend:8000", "/api/admin/users", Some("")),
        "http://backend:8000/api/admin/users"
    );
}

#[test]
fn hop_by_hop_headers_are_recognized_case_insensitively() {
    assert!(is_hop_by_hop("Connection"));
    assert!(is_hop_by_hop("TRANSFER-ENCODING"));
    assert!(is_hop_by_hop("host"));
    assert!(is_hop_by_hop("content-length"));
}

#[test]
fn end_to_end_headers_are_forwarded() {
    assert!(!is_hop_by_hop("content-type"));
    assert!(!is_hop_by_hop("accept"));
    assert!(!is_hop_by_hop("authorization"));
    assert!(!is_hop_by_hop("x-request-id"));
}
