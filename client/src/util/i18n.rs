//! Display-language selection and static translation tables.
//!
//! The operator base is Japanese-first, so Japanese is the default and
//! English the fallback. Translations cover navigation and shared chrome;
//! domain data (handles, board names, template bodies) is rendered verbatim.
//! The preference persists to `localStorage` like dark mode does.

#[cfg(test)]
#[path = "i18n_test.rs"]
mod i18n_test;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "mtbbs_admin_lang";

/// Supported display languages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Lang {
    En,
    #[default]
    Ja,
}

impl Lang {
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ja => "ja",
        }
    }

    #[must_use]
    pub fn from_code(raw: &str) -> Option<Self> {
        match raw {
            "en" => Some(Self::En),
            "ja" => Some(Self::Ja),
            _ => None,
        }
    }
}

/// `(key, english, japanese)` rows. An empty Japanese cell falls back to the
/// English text.
const TABLE: &[(&str, &str, &str)] = &[
    ("nav.title", "MTBBS Admin", "MTBBS 管理"),
    ("nav.dashboard", "Dashboard", "ダッシュボード"),
    ("nav.users", "Users", "ユーザ"),
    ("nav.boards", "Boards", "ボード"),
    ("nav.messages", "Messages", "メッセージ"),
    ("nav.connections", "Connections", "Telnet接続"),
    ("nav.settings", "Settings", "設定"),
    ("common.loading", "Loading...", "読み込み中..."),
    ("common.cancel", "Cancel", "キャンセル"),
    ("common.save", "Save", "保存"),
    ("common.create", "Create", "作成"),
    ("common.delete", "Delete", "削除"),
    ("common.active", "Active", "有効"),
    ("common.inactive", "Inactive", "無効"),
    ("common.never", "Never", "なし"),
    ("common.actions", "Actions", "操作"),
    ("dashboard.total_users", "Total Users", "総ユーザ数"),
    ("dashboard.total_boards", "Total Boards", "総ボード数"),
    ("dashboard.total_messages", "Total Messages", "総メッセージ数"),
    ("dashboard.connections", "Active Connections", "アクティブ接続"),
    ("users.add", "Add User", "ユーザ追加"),
    ("boards.add", "Add Board", "ボード追加"),
    ("messages.add", "Add Message", "メッセージ追加"),
    ("messages.initialize", "Initialize Defaults", "初期メッセージ登録"),
    ("messages.preview", "Preview", "プレビュー"),
];

/// Look up a translation. Unknown keys are echoed back so a missing entry
/// shows up on screen instead of vanishing.
#[must_use]
pub fn translate(lang: Lang, key: &str) -> &str {
    match TABLE.iter().find(|(k, _, _)| *k == key) {
        Some((_, en, ja)) => match lang {
            Lang::En => en,
            Lang::Ja if !ja.is_empty() => ja,
            Lang::Ja => en,
        },
        None => key,
    }
}

/// Read the persisted language preference, defaulting to Japanese.
pub fn read_preference() -> Lang {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                if let Ok(Some(val)) = storage.get_item(STORAGE_KEY) {
                    if let Some(lang) = Lang::from_code(&val) {
                        return lang;
                    }
                }
            }
        }
        Lang::default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Lang::default()
    }
}

/// Persist the language preference to localStorage.
pub fn store_preference(lang: Lang) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, lang.code());
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = lang;
    }
}
