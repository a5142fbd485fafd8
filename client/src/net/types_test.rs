use super::*;

#[test]
fn user_record_deserializes_full_payload() {
    let raw = r#"{
        "user_id": "sysop",
        "handle_name": "System Operator",
        "email": "sysop@example.com",
        "level": 9,
        "is_active": true,
        "must_change_password_on_next_login": false,
        "last_login": "2025-02-01T21:15:00",
        "created_at": "2024-12-01T00:00:00"
    }"#;
    let user: UserRecord = serde_json::from_str(raw).expect("valid user payload");
    assert_eq!(user.user_id, "sysop");
    assert_eq!(user.level, 9);
    assert_eq!(user.last_login.as_deref(), Some("2025-02-01T21:15:00"));
}

#[test]
fn user_record_defaults_flags_the_backend_may_omit() {
    let raw = r#"{
        "user_id": "guest",
        "handle_name": "Guest",
        "email": null,
        "level": 0,
        "last_login": null
    }"#;
    let user: UserRecord = serde_json::from_str(raw).expect("valid user payload");
    assert!(user.is_active);
    assert!(!user.must_change_password_on_next_login);
    assert_eq!(user.email, None);
    assert_eq!(user.created_at, None);
}

#[test]
fn board_record_deserializes() {
    let raw = r#"{
        "board_id": 1,
        "name": "Info Board",
        "description": "お知らせ",
        "read_level": 0,
        "write_level": 9,
        "is_active": true
    }"#;
    let board: BoardRecord = serde_json::from_str(raw).expect("valid board payload");
    assert_eq!(board.board_id, 1);
    assert_eq!(board.description.as_deref(), Some("お知らせ"));
    assert_eq!(board.write_level, 9);
}

#[test]
fn system_stats_tolerates_partial_payloads() {
    let stats: SystemStats = serde_json::from_str(r#"{"total_users": 12}"#).expect("valid stats");
    assert_eq!(stats.total_users, 12);
    assert_eq!(stats.telnet_connections, 0);
}

#[test]
fn telnet_connection_list_deserializes_monitor_payload() {
    let raw = r#"{
        "connections": [
            {
                "client_id": "c-1",
                "user_id": "sysop",
                "handle_name": "System Operator",
                "level": 9,
                "authenticated": true,
                "connected_at": "2025-02-01T21:00:00"
            },
            {
                "client_id": "c-2",
                "user_id": "guest",
                "handle_name": "Guest",
                "level": 0,
                "authenticated": false,
                "connected_at": "2025-02-01T21:05:00"
            }
        ],
        "total": 2,
        "last_updated": "2025-02-01T21:05:03"
    }"#;
    let list: TelnetConnectionList = serde_json::from_str(raw).expect("valid connection list");
    assert_eq!(list.total, 2);
    assert_eq!(list.connections.len(), 2);
    assert!(list.connections[0].authenticated);
    assert!(!list.connections[1].authenticated);
}

#[test]
fn telnet_connection_list_defaults_to_empty() {
    let list: TelnetConnectionList = serde_json::from_str("{}").expect("valid empty payload");
    assert!(list.connections.is_empty());
    assert_eq!(list.last_updated, None);
}

#[test]
fn telnet_stats_keeps_level_distribution_keys_as_strings() {
    let raw = r#"{
        "total_connections": 3,
        "authenticated_users": 2,
        "guest_users": 1,
        "level_distribution": {"0": 1, "9": 2},
        "last_updated": "2025-02-01T21:05:03"
    }"#;
    let stats: TelnetStats = serde_json::from_str(raw).expect("valid telnet stats");
    assert_eq!(stats.level_distribution.get("9"), Some(&2));
    assert_eq!(stats.total_connections, 3);
}
