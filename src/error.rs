//! Error types for the admin API proxy.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Failure forwarding a request to an upstream collaborator.
#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    /// The inbound method could not be mapped onto the upstream client.
    #[error("unsupported method: {0}")]
    Method(String),
    /// The inbound request body could not be buffered, or the upstream
    /// response could not be reassembled.
    #[error("failed to relay request body: {0}")]
    Body(String),
    /// The upstream request itself failed (connect, timeout, protocol).
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "admin API proxy failure");
        let status = match &self {
            Self::Method(_) => StatusCode::METHOD_NOT_ALLOWED,
            Self::Body(_) => StatusCode::BAD_REQUEST,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        };
        (status, self.to_string()).into_response()
    }
}
