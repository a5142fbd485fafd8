//! Connections page: live telnet monitor with stat cards and session table.
//!
//! SYSTEM CONTEXT
//! ==============
//! Data comes from the separate telnet monitor service via the `/api/telnet`
//! proxy routes; everything here is read-only and refreshed on a short poll.

use leptos::prelude::*;

use crate::components::stat_card::StatCard;
use crate::state::telnet::TelnetState;
use crate::state::ui::UiState;
use crate::util::format::{format_timestamp, level_label};
use crate::util::i18n::translate;

fn load_telnet(telnet: RwSignal<TelnetState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let connections = crate::net::api::fetch_telnet_connections().await;
        let stats = crate::net::api::fetch_telnet_stats().await;
        telnet.update(|s| {
            s.loading = false;
            match (connections, stats) {
                (Ok(connections), Ok(stats)) => {
                    s.connections = connections;
                    s.stats = stats;
                    s.error = None;
                }
                (Err(e), _) | (_, Err(e)) => s.error = Some(e),
            }
        });
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = telnet;
    }
}

/// Telnet monitor page; polls the monitor service every three seconds.
#[component]
pub fn ConnectionsPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let telnet = expect_context::<RwSignal<TelnetState>>();

    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() {
            return;
        }
        requested.set(true);
        telnet.update(|s| s.loading = true);
        load_telnet(telnet);
    });

    #[cfg(feature = "hydrate")]
    {
        let poll_alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let poll_alive_task = poll_alive.clone();
        let telnet_poll = telnet;
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_secs(3)).await;
                if !poll_alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                load_telnet(telnet_poll);
            }
        });
        on_cleanup(move || poll_alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let total = Signal::derive(move || telnet.get().stats.total_connections);
    let authenticated = Signal::derive(move || telnet.get().stats.authenticated_users);
    let guests = Signal::derive(move || telnet.get().stats.guest_users);

    view! {
        <div class="page">
            <header class="page__header">
                <h1>{move || translate(ui.get().lang, "nav.connections")}</h1>
            </header>

            <Show when=move || telnet.get().error.is_some()>
                <p class="page__error">{move || telnet.get().error.unwrap_or_default()}</p>
            </Show>

            <Show
                when=move || !telnet.get().loading
                fallback=move || {
                    view! { <p class="page__loading">{move || translate(ui.get().lang, "common.loading")}</p> }
                }
            >
                <div class="stat-grid">
                    <StatCard title="総接続数".to_owned() value=total accent="#1976d2"/>
                    <StatCard title="認証済みユーザー".to_owned() value=authenticated accent="#2e7d32"/>
                    <StatCard title="ゲストユーザー".to_owned() value=guests accent="#0288d1"/>
                </div>

                <div class="table-wrap">
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"クライアントID"</th>
                                <th>"ユーザーID"</th>
                                <th>"ハンドル名"</th>
                                <th>"レベル"</th>
                                <th>"認証状態"</th>
                                <th>"接続時刻"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let list = telnet.get().connections;
                                if list.connections.is_empty() {
                                    view! {
                                        <tr>
                                            <td class="data-table__empty" colspan="6">
                                                "現在接続中のユーザーはいません"
                                            </td>
                                        </tr>
                                    }
                                        .into_any()
                                } else {
                                    list.connections
                                        .into_iter()
                                        .map(|conn| {
                                            let auth_chip = if conn.authenticated {
                                                ("chip chip--success", "認証済み")
                                            } else {
                                                ("chip", "未認証")
                                            };
                                            view! {
                                                <tr>
                                                    <td class="data-table__mono">{conn.client_id.clone()}</td>
                                                    <td><strong>{conn.user_id.clone()}</strong></td>
                                                    <td>{conn.handle_name.clone()}</td>
                                                    <td>
                                                        <span class="chip chip--primary">
                                                            {level_label(conn.level)}
                                                        </span>
                                                    </td>
                                                    <td>
                                                        <span class=auth_chip.0>{auth_chip.1}</span>
                                                    </td>
                                                    <td class="data-table__dim">
                                                        {format_timestamp(&conn.connected_at)}
                                                    </td>
                                                </tr>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                        .into_any()
                                }
                            }}
                        </tbody>
                    </table>
                </div>

                <Show when=move || telnet.get().connections.last_updated.is_some()>
                    <p class="page__caption">
                        "最終更新: "
                        {move || {
                            telnet
                                .get()
                                .connections
                                .last_updated
                                .as_deref()
                                .map(format_timestamp)
                                .unwrap_or_default()
                        }}
                        " (自動更新: 3秒ごと)"
                    </p>
                </Show>
            </Show>
        </div>
    }
}
