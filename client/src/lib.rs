//! # client
//!
//! Leptos + WASM admin dashboard for the MTBBS server.
//!
//! This crate contains pages, components, application state, REST DTOs, and
//! the fetch layer. All data comes from the external BBS backend and telnet
//! monitor services, reached through the host's `/api` proxy; no business
//! logic lives here beyond presentation and preview substitution (which the
//! `sysmsg` crate owns).

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
