//! REST API helpers for the admin backend and telnet monitor.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` against the host's
//! `/api` proxy. Server-side (SSR): stubs returning errors since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` outputs instead of panics so fetch
//! failures degrade to inline error text without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{
    BoardRecord, SystemMessage, SystemStats, TelnetConnectionList, TelnetStats, UserRecord,
};

#[cfg(any(test, feature = "hydrate"))]
const ADMIN_USERS: &str = "/api/admin/users";
#[cfg(any(test, feature = "hydrate"))]
const ADMIN_BOARDS: &str = "/api/admin/boards";
#[cfg(any(test, feature = "hydrate"))]
const ADMIN_MESSAGES: &str = "/api/admin/messages";

#[cfg(any(test, feature = "hydrate"))]
fn admin_user_endpoint(user_id: &str) -> String {
    format!("{ADMIN_USERS}/{user_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn admin_board_endpoint(board_id: i64) -> String {
    format!("{ADMIN_BOARDS}/{board_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn admin_message_endpoint(message_key: &str) -> String {
    format!("{ADMIN_MESSAGES}/{message_key}")
}

#[cfg(any(test, feature = "hydrate"))]
fn admin_messages_endpoint(category: Option<&str>) -> String {
    match category {
        Some(category) => format!("{ADMIN_MESSAGES}?category={category}"),
        None => ADMIN_MESSAGES.to_owned(),
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(status: u16) -> String {
    format!("request failed: {status}")
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, String> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(request_failed_message(resp.status()));
    }
    resp.json::<T>().await.map_err(|e| e.to_string())
}

#[cfg(feature = "hydrate")]
async fn post_json<T: serde::de::DeserializeOwned>(
    url: &str,
    payload: &serde_json::Value,
) -> Result<T, String> {
    let resp = gloo_net::http::Request::post(url)
        .json(payload)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(request_failed_message(resp.status()));
    }
    resp.json::<T>().await.map_err(|e| e.to_string())
}

#[cfg(feature = "hydrate")]
async fn put_json<T: serde::de::DeserializeOwned>(
    url: &str,
    payload: &serde_json::Value,
) -> Result<T, String> {
    let resp = gloo_net::http::Request::put(url)
        .json(payload)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(request_failed_message(resp.status()));
    }
    resp.json::<T>().await.map_err(|e| e.to_string())
}

#[cfg(feature = "hydrate")]
async fn delete(url: &str) -> Result<(), String> {
    let resp = gloo_net::http::Request::delete(url)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(request_failed_message(resp.status()));
    }
    Ok(())
}

/// Fetch all user accounts.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the backend responds
/// with a non-OK status.
pub async fn fetch_users() -> Result<Vec<UserRecord>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json(ADMIN_USERS).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Create a user account via `POST /api/admin/users`.
///
/// # Errors
///
/// Returns an error string on HTTP failure or a non-OK backend status.
pub async fn create_user(payload: &serde_json::Value) -> Result<UserRecord, String> {
    #[cfg(feature = "hydrate")]
    {
        post_json(ADMIN_USERS, payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err("not available on server".to_owned())
    }
}

/// Update a user account via `PUT /api/admin/users/{user_id}`.
///
/// # Errors
///
/// Returns an error string on HTTP failure or a non-OK backend status.
pub async fn update_user(user_id: &str, payload: &serde_json::Value) -> Result<UserRecord, String> {
    #[cfg(feature = "hydrate")]
    {
        put_json(&admin_user_endpoint(user_id), payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (user_id, payload);
        Err("not available on server".to_owned())
    }
}

/// Delete a user account via `DELETE /api/admin/users/{user_id}`.
///
/// # Errors
///
/// Returns an error string on HTTP failure or a non-OK backend status.
pub async fn delete_user(user_id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        delete(&admin_user_endpoint(user_id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = user_id;
        Err("not available on server".to_owned())
    }
}

/// Fetch all message boards.
///
/// # Errors
///
/// Returns an error string on HTTP failure or a non-OK backend status.
pub async fn fetch_boards() -> Result<Vec<BoardRecord>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json(ADMIN_BOARDS).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Create a board via `POST /api/admin/boards`.
///
/// # Errors
///
/// Returns an error string on HTTP failure or a non-OK backend status.
pub async fn create_board(payload: &serde_json::Value) -> Result<BoardRecord, String> {
    #[cfg(feature = "hydrate")]
    {
        post_json(ADMIN_BOARDS, payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err("not available on server".to_owned())
    }
}

/// Update a board via `PUT /api/admin/boards/{board_id}`.
///
/// # Errors
///
/// Returns an error string on HTTP failure or a non-OK backend status.
pub async fn update_board(
    board_id: i64,
    payload: &serde_json::Value,
) -> Result<BoardRecord, String> {
    #[cfg(feature = "hydrate")]
    {
        put_json(&admin_board_endpoint(board_id), payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (board_id, payload);
        Err("not available on server".to_owned())
    }
}

/// Delete a board via `DELETE /api/admin/boards/{board_id}`.
///
/// # Errors
///
/// Returns an error string on HTTP failure or a non-OK backend status.
pub async fn delete_board(board_id: i64) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        delete(&admin_board_endpoint(board_id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = board_id;
        Err("not available on server".to_owned())
    }
}

/// Fetch system message templates, optionally filtered by category on the
/// backend side.
///
/// # Errors
///
/// Returns an error string on HTTP failure or a non-OK backend status.
pub async fn fetch_messages(category: Option<&str>) -> Result<Vec<SystemMessage>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&admin_messages_endpoint(category)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = category;
        Err("not available on server".to_owned())
    }
}

/// Create a system message via `POST /api/admin/messages`.
///
/// # Errors
///
/// Returns an error string on HTTP failure or a non-OK backend status.
pub async fn create_message(payload: &serde_json::Value) -> Result<SystemMessage, String> {
    #[cfg(feature = "hydrate")]
    {
        post_json(ADMIN_MESSAGES, payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err("not available on server".to_owned())
    }
}

/// Update a system message via `PUT /api/admin/messages/{message_key}`.
///
/// # Errors
///
/// Returns an error string on HTTP failure or a non-OK backend status.
pub async fn update_message(
    message_key: &str,
    payload: &serde_json::Value,
) -> Result<SystemMessage, String> {
    #[cfg(feature = "hydrate")]
    {
        put_json(&admin_message_endpoint(message_key), payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (message_key, payload);
        Err("not available on server".to_owned())
    }
}

/// Delete a system message via `DELETE /api/admin/messages/{message_key}`.
///
/// # Errors
///
/// Returns an error string on HTTP failure or a non-OK backend status.
pub async fn delete_message(message_key: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        delete(&admin_message_endpoint(message_key)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message_key;
        Err("not available on server".to_owned())
    }
}

/// Seed the default message catalog via `POST /api/admin/messages/initialize`.
/// Existing messages are not overwritten by the backend.
///
/// # Errors
///
/// Returns an error string on HTTP failure or a non-OK backend status.
pub async fn initialize_messages() -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/admin/messages/initialize")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch aggregate system statistics.
///
/// # Errors
///
/// Returns an error string on HTTP failure or a non-OK backend status.
pub async fn fetch_stats() -> Result<SystemStats, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/admin/stats").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch the live telnet connection list from the monitor service.
///
/// # Errors
///
/// Returns an error string on HTTP failure or a non-OK monitor status.
pub async fn fetch_telnet_connections() -> Result<TelnetConnectionList, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/telnet/connections").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch aggregated telnet counters from the monitor service.
///
/// # Errors
///
/// Returns an error string on HTTP failure or a non-OK monitor status.
pub async fn fetch_telnet_stats() -> Result<TelnetStats, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/telnet/stats").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}
