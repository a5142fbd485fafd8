//! Dark mode initialization and toggle.
//!
//! The preference is stored in `localStorage` as the same `"dark"`/`"light"`
//! token written to the `data-theme` attribute on `<html>`, so the stylesheet
//! and the stored value can never disagree. With no stored preference the
//! system color scheme decides. SSR paths no-op so server rendering stays
//! deterministic.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "mtbbs_admin_theme";

fn theme_token(enabled: bool) -> &'static str {
    if enabled { "dark" } else { "light" }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Read the dark mode preference.
///
/// A stored `"dark"`/`"light"` token wins; otherwise the system
/// `prefers-color-scheme` decides.
pub fn read_preference() -> bool {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            if let Ok(Some(token)) = storage.get_item(STORAGE_KEY) {
                return token == "dark";
            }
        }

        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) =
            web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element())
        {
            let _ = el.set_attribute("data-theme", theme_token(enabled));
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

/// Toggle dark mode, apply it, and persist the new preference.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(STORAGE_KEY, theme_token(next));
        }
    }
    next
}
