//! Two-state language toggle, persisted like the dark mode preference.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::i18n::{self, Lang};

/// EN / 日本語 toggle buttons. The active language is highlighted.
#[component]
pub fn LanguageSwitcher() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let select = move |lang: Lang| {
        ui.update(|u| u.lang = lang);
        i18n::store_preference(lang);
    };

    let button_class = move |lang: Lang| {
        if ui.get().lang == lang {
            "btn lang-switch__btn lang-switch__btn--active"
        } else {
            "btn lang-switch__btn"
        }
    };

    view! {
        <div class="lang-switch">
            <button class=move || button_class(Lang::En) on:click=move |_| select(Lang::En)>
                "EN"
            </button>
            <button class=move || button_class(Lang::Ja) on:click=move |_| select(Lang::Ja)>
                "日本語"
            </button>
        </div>
    }
}
