//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::sidebar::Sidebar;
use crate::pages::{
    boards::BoardsPage, connections::ConnectionsPage, dashboard::DashboardPage,
    messages::MessagesPage, settings::SettingsPage, users::UsersPage,
};
use crate::state::{
    boards::BoardsState, messages::MessagesState, stats::StatsState, telnet::TelnetState,
    ui::UiState, users::UsersState,
};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="ja">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Provide reactive state contexts for all child components.
    let ui = RwSignal::new(UiState::default());
    let users = RwSignal::new(UsersState::default());
    let boards = RwSignal::new(BoardsState::default());
    let messages = RwSignal::new(MessagesState::default());
    let stats = RwSignal::new(StatsState::default());
    let telnet = RwSignal::new(TelnetState::default());

    provide_context(ui);
    provide_context(users);
    provide_context(boards);
    provide_context(messages);
    provide_context(stats);
    provide_context(telnet);

    // Restore persisted display preferences once the browser is available.
    Effect::new(move || {
        let dark = crate::util::dark_mode::read_preference();
        crate::util::dark_mode::apply(dark);
        let lang = crate::util::i18n::read_preference();
        ui.update(|u| {
            u.dark_mode = dark;
            u.lang = lang;
        });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/mtbbs-admin.css"/>
        <Title text="MTBBS Admin"/>

        <Router>
            <div class="app-shell">
                <Sidebar/>
                <main class="app-shell__content">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=StaticSegment("") view=DashboardPage/>
                        <Route path=StaticSegment("users") view=UsersPage/>
                        <Route path=StaticSegment("boards") view=BoardsPage/>
                        <Route path=StaticSegment("messages") view=MessagesPage/>
                        <Route path=StaticSegment("connections") view=ConnectionsPage/>
                        <Route path=StaticSegment("settings") view=SettingsPage/>
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
