//! Navigation rail with route links, language toggle, and dark mode toggle.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::language_switcher::LanguageSwitcher;
use crate::state::ui::UiState;
use crate::util::i18n::translate;

const NAV_ITEMS: &[(&str, &str)] = &[
    ("/", "nav.dashboard"),
    ("/users", "nav.users"),
    ("/boards", "nav.boards"),
    ("/messages", "nav.messages"),
    ("/connections", "nav.connections"),
    ("/settings", "nav.settings"),
];

/// Left-hand navigation for every admin screen.
#[component]
pub fn Sidebar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let pathname = use_location().pathname;

    let link_class = move |path: &str| {
        if pathname.get() == path {
            "sidebar__link sidebar__link--active"
        } else {
            "sidebar__link"
        }
    };

    view! {
        <nav class="sidebar">
            <span class="sidebar__title">{move || translate(ui.get().lang, "nav.title")}</span>
            <div class="sidebar__links">
                {NAV_ITEMS
                    .iter()
                    .map(|&(path, key)| {
                        view! {
                            <a href=path class=move || link_class(path)>
                                {move || translate(ui.get().lang, key)}
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
            <div class="sidebar__footer">
                <LanguageSwitcher/>
                <button
                    class="btn sidebar__dark-toggle"
                    on:click=move |_| {
                        let current = ui.get().dark_mode;
                        let next = crate::util::dark_mode::toggle(current);
                        ui.update(|u| u.dark_mode = next);
                    }
                    title="Toggle dark mode"
                >
                    {move || if ui.get().dark_mode { "☀" } else { "☾" }}
                </button>
            </div>
        </nav>
    }
}
