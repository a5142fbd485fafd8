//! Reverse proxy for the `/api` surface.
//!
//! DESIGN
//! ======
//! The browser only ever talks to this host; admin and telnet-monitor
//! requests are forwarded verbatim to the configured upstreams. Bodies are
//! buffered (the payloads here are small JSON documents) and hop-by-hop
//! headers are stripped in both directions.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::response::Response;

use crate::error::ProxyError;
use crate::state::AppState;

/// Upper bound on a buffered request body. The largest legitimate payload is
/// a message template body, which is a few kilobytes.
const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Headers owned by the individual hop, never forwarded. `host` and
/// `content-length` are recomputed by the upstream client.
const HOP_BY_HOP: &[&str] = &[
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
    "host",
    "content-length",
];

fn is_hop_by_hop(name: &str) -> bool {
    HOP_BY_HOP.iter().any(|h| name.eq_ignore_ascii_case(h))
}

/// Join a normalized base URL with the inbound path and query.
fn upstream_url(base: &str, path: &str, query: Option<&str>) -> String {
    match query {
        Some(q) if !q.is_empty() => format!("{base}{path}?{q}"),
        _ => format!("{base}{path}"),
    }
}

/// Forward an `/api/*` request to the matching upstream and relay the
/// response.
///
/// # Errors
///
/// Returns a [`ProxyError`] when the request cannot be buffered or the
/// upstream is unreachable; callers see it as a 4xx/502 response.
pub async fn forward(
    State(state): State<AppState>,
    req: Request,
) -> Result<Response, ProxyError> {
    let path = req.uri().path().to_owned();
    let query = req.uri().query().map(str::to_owned);
    let url = upstream_url(state.upstreams.select_base(&path), &path, query.as_deref());

    let method = reqwest::Method::from_bytes(req.method().as_str().as_bytes())
        .map_err(|_| ProxyError::Method(req.method().to_string()))?;

    let mut headers = reqwest::header::HeaderMap::new();
    for (name, value) in req.headers() {
        if is_hop_by_hop(name.as_str()) {
            continue;
        }
        if let (Ok(name), Ok(value)) = (
            reqwest::header::HeaderName::from_bytes(name.as_str().as_bytes()),
            reqwest::header::HeaderValue::from_bytes(value.as_bytes()),
        ) {
            headers.insert(name, value);
        }
    }

    let body = axum::body::to_bytes(req.into_body(), MAX_BODY_BYTES)
        .await
        .map_err(|e| ProxyError::Body(e.to_string()))?;

    tracing::debug!(%method, %url, "forwarding admin API request");

    let upstream = state
        .http
        .request(method, url.as_str())
        .headers(headers)
        .body(body.to_vec())
        .send()
        .await?;

    let status =
        StatusCode::from_u16(upstream.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
    let mut builder = Response::builder().status(status);
    for (name, value) in upstream.headers() {
        if is_hop_by_hop(name.as_str()) {
            continue;
        }
        builder = builder.header(name.as_str(), value.as_bytes());
    }

    let bytes = upstream.bytes().await?;
    builder
        .body(Body::from(bytes))
        .map_err(|e| ProxyError::Body(e.to_string()))
}
