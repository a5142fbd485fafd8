//! Cross-page UI preferences.

use crate::util::i18n::Lang;

/// Dark mode and display language, persisted to localStorage by the
/// corresponding `util` modules.
#[derive(Clone, Copy, Debug, Default)]
pub struct UiState {
    pub dark_mode: bool,
    pub lang: Lang,
}
