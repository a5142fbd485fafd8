//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the leptos SSR options, the upstream configuration, and the shared
//! HTTP client used by the proxy. Clone is required by Axum; all inner
//! fields are cheaply cloneable.

use axum::extract::FromRef;
use leptos::config::LeptosOptions;

use crate::config::UpstreamConfig;

#[derive(Clone)]
pub struct AppState {
    pub leptos_options: LeptosOptions,
    pub upstreams: UpstreamConfig,
    pub http: reqwest::Client,
}

impl FromRef<AppState> for LeptosOptions {
    fn from_ref(state: &AppState) -> Self {
        state.leptos_options.clone()
    }
}
