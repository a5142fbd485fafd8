//! Colored counter card used on the dashboard and connections pages.

use leptos::prelude::*;

/// A single statistic with a colored accent block. `title` is a signal so
/// language switches retitle mounted cards.
#[component]
pub fn StatCard(
    #[prop(into)] title: Signal<String>,
    #[prop(into)] value: Signal<i64>,
    accent: &'static str,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-card__accent" style:background-color=accent></span>
            <div class="stat-card__body">
                <span class="stat-card__value">{move || value.get()}</span>
                <span class="stat-card__title">{move || title.get()}</span>
            </div>
        </div>
    }
}
