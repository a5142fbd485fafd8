//! Dashboard page: aggregate counters and system status panels.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the landing route. Counters come from the admin backend's stats
//! endpoint and refresh on a short poll so the connection figure stays
//! roughly live without a dedicated socket.

use leptos::prelude::*;

use crate::components::stat_card::StatCard;
use crate::state::stats::StatsState;
use crate::state::ui::UiState;
use crate::util::i18n::translate;

fn load_stats(stats: RwSignal<StatsState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_stats().await {
            Ok(fetched) => stats.update(|s| {
                s.stats = fetched;
                s.loading = false;
                s.error = None;
            }),
            Err(e) => stats.update(|s| {
                s.loading = false;
                s.error = Some(e);
            }),
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = stats;
    }
}

/// Dashboard landing page with stat cards; polls every five seconds.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let stats = expect_context::<RwSignal<StatsState>>();

    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() {
            return;
        }
        requested.set(true);
        stats.update(|s| s.loading = true);
        load_stats(stats);
    });

    #[cfg(feature = "hydrate")]
    {
        let poll_alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let poll_alive_task = poll_alive.clone();
        let stats_poll = stats;
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_secs(5)).await;
                if !poll_alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                load_stats(stats_poll);
            }
        });
        on_cleanup(move || poll_alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let total_users = Signal::derive(move || stats.get().stats.total_users);
    let total_boards = Signal::derive(move || stats.get().stats.total_boards);
    let total_messages = Signal::derive(move || stats.get().stats.total_messages);
    let connections = Signal::derive(move || stats.get().stats.telnet_connections);

    view! {
        <div class="page">
            <header class="page__header">
                <h1>{move || translate(ui.get().lang, "nav.dashboard")}</h1>
            </header>

            <Show when=move || stats.get().error.is_some()>
                <p class="page__error">{move || stats.get().error.unwrap_or_default()}</p>
            </Show>

            <Show
                when=move || !stats.get().loading
                fallback=move || {
                    view! { <p class="page__loading">{move || translate(ui.get().lang, "common.loading")}</p> }
                }
            >
                <div class="stat-grid">
                    <StatCard
                        title=Signal::derive(move || {
                            translate(ui.get().lang, "dashboard.total_users").to_owned()
                        })
                        value=total_users
                        accent="#1976d2"
                    />
                    <StatCard
                        title=Signal::derive(move || {
                            translate(ui.get().lang, "dashboard.total_boards").to_owned()
                        })
                        value=total_boards
                        accent="#2e7d32"
                    />
                    <StatCard
                        title=Signal::derive(move || {
                            translate(ui.get().lang, "dashboard.total_messages").to_owned()
                        })
                        value=total_messages
                        accent="#ed6c02"
                    />
                    <StatCard
                        title=Signal::derive(move || {
                            translate(ui.get().lang, "dashboard.connections").to_owned()
                        })
                        value=connections
                        accent="#9c27b0"
                    />
                </div>

                <div class="panel-grid">
                    <div class="panel">
                        <h2>"System Status"</h2>
                        <p class="panel__line">"MTBBS Linux Version 4.0.0"</p>
                        <p class="panel__line">"Server Status: Running"</p>
                        <p class="panel__line">"Telnet Server: Active (Port 23)"</p>
                    </div>
                    <div class="panel">
                        <h2>"Quick Actions"</h2>
                        <p class="panel__line">"• View active Telnet connections"</p>
                        <p class="panel__line">"• Manage users and boards"</p>
                        <p class="panel__line">"• Monitor system performance"</p>
                    </div>
                </div>
            </Show>
        </div>
    }
}
