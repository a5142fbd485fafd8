//! Router assembly: health, API proxy, SSR routes, static fallback.

use axum::routing::{any, get};
use axum::{Json, Router};
use leptos_axum::LeptosRoutes;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::proxy;
use crate::state::AppState;

pub fn app(state: AppState) -> Router {
    let leptos_options = state.leptos_options.clone();
    let routes = leptos_axum::generate_route_list(client::app::App);

    Router::new()
        .route("/healthz", get(healthz))
        .route("/api/{*path}", any(proxy::forward))
        .leptos_routes(&state, routes, {
            let leptos_options = leptos_options.clone();
            move || client::app::shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler::<AppState, _>(
            client::app::shell,
        ))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
}

async fn healthz() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
