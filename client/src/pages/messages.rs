//! Messages page: system message templates with category filter, CRUD
//! dialogs, and live placeholder preview.
//!
//! SYSTEM CONTEXT
//! ==============
//! Template bodies drive the telnet-side screens, so edits here change what
//! BBS callers see. The preview pane substitutes example values locally via
//! `sysmsg`; nothing is sent to the backend until Save.

use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::net::types::{Category, SystemMessage};
use crate::state::messages::MessagesState;
use crate::state::ui::UiState;
use crate::util::i18n::translate;

#[cfg(test)]
#[path = "messages_test.rs"]
mod messages_test;

/// Form backing both the create and edit dialogs.
#[derive(Clone, Debug, PartialEq)]
struct MessageForm {
    message_key: String,
    message_name: String,
    category: String,
    description: String,
    variables: String,
    content: String,
    is_active: bool,
}

impl Default for MessageForm {
    fn default() -> Self {
        Self {
            message_key: String::new(),
            message_name: String::new(),
            category: Category::Menu.as_str().to_owned(),
            description: String::new(),
            variables: String::new(),
            content: String::new(),
            is_active: true,
        }
    }
}

impl MessageForm {
    fn from_record(message: &SystemMessage) -> Self {
        Self {
            message_key: message.message_key.clone(),
            message_name: message.message_name.clone(),
            category: message.category.clone(),
            description: message.description.clone().unwrap_or_default(),
            variables: message.variables.clone().unwrap_or_default(),
            content: message.content.clone(),
            is_active: message.is_active,
        }
    }
}

/// JSON body for `POST /api/admin/messages`.
fn message_create_payload(form: &MessageForm) -> serde_json::Value {
    serde_json::json!({
        "message_key": form.message_key.trim(),
        "message_name": form.message_name.trim(),
        "category": form.category,
        "content": form.content,
        "description": optional_field(&form.description),
        "variables": optional_field(&form.variables),
        "is_active": form.is_active,
    })
}

/// JSON body for `PUT /api/admin/messages/{message_key}`. The key is
/// immutable and travels in the path only.
fn message_update_payload(form: &MessageForm) -> serde_json::Value {
    serde_json::json!({
        "message_name": form.message_name.trim(),
        "category": form.category,
        "content": form.content,
        "description": optional_field(&form.description),
        "variables": optional_field(&form.variables),
        "is_active": form.is_active,
    })
}

fn optional_field(raw: &str) -> serde_json::Value {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::Value::String(trimmed.to_owned())
    }
}

/// Apply the client-side category filter; `"all"` passes everything.
fn filter_messages(items: &[SystemMessage], filter: &str) -> Vec<SystemMessage> {
    items
        .iter()
        .filter(|message| filter == "all" || message.category == filter)
        .cloned()
        .collect()
}

/// Chip styling per category, mirroring the screen colors the operators know.
fn category_chip_class(category: &str) -> &'static str {
    match Category::parse(category) {
        Some(Category::Menu) => "chip chip--primary",
        Some(Category::Greeting) => "chip chip--success",
        Some(Category::Info) => "chip chip--info",
        Some(Category::Help) => "chip chip--warning",
        None => "chip",
    }
}

fn load_messages(messages: RwSignal<MessagesState>) {
    messages.update(|s| s.loading = true);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_messages(None).await {
            Ok(items) => messages.update(|s| {
                s.items = items;
                s.loading = false;
                s.error = None;
            }),
            Err(e) => messages.update(|s| {
                s.loading = false;
                s.error = Some(e);
            }),
        }
    });
}

/// Messages page with template table, category filter, and preview dialog.
#[component]
pub fn MessagesPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let messages = expect_context::<RwSignal<MessagesState>>();

    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() {
            return;
        }
        requested.set(true);
        load_messages(messages);
    });

    // Templates change rarely but another operator may edit concurrently.
    #[cfg(feature = "hydrate")]
    {
        let poll_alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let poll_alive_task = poll_alive.clone();
        let messages_poll = messages;
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_secs(10)).await;
                if !poll_alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                match crate::net::api::fetch_messages(None).await {
                    Ok(items) => messages_poll.update(|s| {
                        s.items = items;
                        s.error = None;
                    }),
                    Err(e) => messages_poll.update(|s| s.error = Some(e)),
                }
            }
        });
        on_cleanup(move || poll_alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let category_filter = RwSignal::new("all".to_owned());
    let show_dialog = RwSignal::new(false);
    let edit_mode = RwSignal::new(false);
    let form = RwSignal::new(MessageForm::default());
    let delete_target = RwSignal::new(None::<String>);
    let show_initialize = RwSignal::new(false);

    let on_add = move |_| {
        edit_mode.set(false);
        form.set(MessageForm::default());
        show_dialog.set(true);
    };
    let on_edit = Callback::new(move |message: SystemMessage| {
        edit_mode.set(true);
        form.set(MessageForm::from_record(&message));
        show_dialog.set(true);
    });
    let on_cancel = Callback::new(move |()| show_dialog.set(false));
    let on_delete_cancel = Callback::new(move |()| delete_target.set(None));
    let on_delete_confirm = Callback::new(move |()| {
        let Some(message_key) = delete_target.get_untracked() else {
            return;
        };
        delete_target.set(None);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_message(&message_key).await {
                Ok(()) => load_messages(messages),
                Err(e) => messages.update(|s| s.error = Some(e)),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = message_key;
    });
    let on_initialize_cancel = Callback::new(move |()| show_initialize.set(false));
    let on_initialize_confirm = Callback::new(move |()| {
        show_initialize.set(false);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::initialize_messages().await {
                Ok(()) => load_messages(messages),
                Err(e) => messages.update(|s| s.error = Some(e)),
            }
        });
    });

    view! {
        <div class="page">
            <header class="page__header">
                <h1>{move || translate(ui.get().lang, "nav.messages")}</h1>
                <div class="page__header-actions">
                    <select
                        class="page__filter"
                        on:change=move |ev| category_filter.set(event_target_value(&ev))
                        prop:value=move || category_filter.get()
                    >
                        <option value="all">"All Categories"</option>
                        {Category::ALL
                            .iter()
                            .map(|category| {
                                view! { <option value=category.as_str()>{category.as_str()}</option> }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                    <button class="btn" on:click=move |_| show_initialize.set(true)>
                        {move || translate(ui.get().lang, "messages.initialize")}
                    </button>
                    <button class="btn btn--primary" on:click=on_add>
                        {move || translate(ui.get().lang, "messages.add")}
                    </button>
                </div>
            </header>

            <Show when=move || messages.get().error.is_some()>
                <p class="page__error">{move || messages.get().error.unwrap_or_default()}</p>
            </Show>

            <Show
                when=move || !messages.get().loading
                fallback=move || {
                    view! { <p class="page__loading">{move || translate(ui.get().lang, "common.loading")}</p> }
                }
            >
                <div class="table-wrap">
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Key"</th>
                                <th>"Name"</th>
                                <th>"Category"</th>
                                <th>"Variables"</th>
                                <th>"Status"</th>
                                <th>{move || translate(ui.get().lang, "common.actions")}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                filter_messages(&messages.get().items, &category_filter.get())
                                    .into_iter()
                                    .map(|message| {
                                        let edit_record = message.clone();
                                        let delete_key = message.message_key.clone();
                                        let status_key = if message.is_active {
                                            "common.active"
                                        } else {
                                            "common.inactive"
                                        };
                                        let status_class = if message.is_active {
                                            "chip chip--success"
                                        } else {
                                            "chip"
                                        };
                                        view! {
                                            <tr>
                                                <td class="data-table__mono">{message.message_key.clone()}</td>
                                                <td>{message.message_name.clone()}</td>
                                                <td>
                                                    <span class=category_chip_class(&message.category)>
                                                        {message.category.clone()}
                                                    </span>
                                                </td>
                                                <td class="data-table__dim">
                                                    {message.variables.clone().unwrap_or_else(|| "-".to_owned())}
                                                </td>
                                                <td>
                                                    <span class=status_class>
                                                        {translate(ui.get().lang, status_key)}
                                                    </span>
                                                </td>
                                                <td>
                                                    <button
                                                        class="btn btn--small"
                                                        on:click=move |_| on_edit.run(edit_record.clone())
                                                    >
                                                        "Edit"
                                                    </button>
                                                    <button
                                                        class="btn btn--small btn--danger"
                                                        on:click=move |_| delete_target.set(Some(delete_key.clone()))
                                                    >
                                                        "Delete"
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </tbody>
                    </table>
                </div>
            </Show>

            <Show when=move || show_dialog.get()>
                <MessageDialog form=form edit_mode=edit_mode on_cancel=on_cancel messages=messages/>
            </Show>
            <Show when=move || delete_target.get().is_some()>
                <ConfirmDialog
                    title="Delete Message".to_owned()
                    message="This will permanently delete the template; telnet screens using it fall back to a missing-message notice.".to_owned()
                    confirm_label="Delete".to_owned()
                    on_cancel=on_delete_cancel
                    on_confirm=on_delete_confirm
                />
            </Show>
            <Show when=move || show_initialize.get()>
                <ConfirmDialog
                    title="Initialize Defaults".to_owned()
                    message="Initialize default messages from the built-in catalog? Existing messages will not be overwritten.".to_owned()
                    confirm_label="Initialize".to_owned()
                    on_cancel=on_initialize_cancel
                    on_confirm=on_initialize_confirm
                />
            </Show>
        </div>
    }
}

/// Modal dialog for creating or editing a template, with a live preview pane
/// substituting example values for the declared variables.
#[component]
fn MessageDialog(
    form: RwSignal<MessageForm>,
    edit_mode: RwSignal<bool>,
    on_cancel: Callback<()>,
    messages: RwSignal<MessagesState>,
) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let submit = Callback::new(move |()| {
        let current = form.get_untracked();
        if current.message_key.trim().is_empty() || current.message_name.trim().is_empty() {
            return;
        }
        let editing = edit_mode.get_untracked();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = if editing {
                crate::net::api::update_message(
                    current.message_key.trim(),
                    &message_update_payload(&current),
                )
                .await
                .map(|_| ())
            } else {
                crate::net::api::create_message(&message_create_payload(&current))
                    .await
                    .map(|_| ())
            };
            match result {
                Ok(()) => load_messages(messages),
                Err(e) => messages.update(|s| s.error = Some(e)),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (current, editing, messages);
        on_cancel.run(());
    });

    let preview_text = move || {
        let current = form.get();
        sysmsg::preview(&current.content, &current.variables)
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog dialog--wide" on:click=move |ev| ev.stop_propagation()>
                <h2>
                    {move || {
                        if edit_mode.get() {
                            format!("Edit Message: {}", form.get().message_name)
                        } else {
                            "Create New Message".to_owned()
                        }
                    }}
                </h2>
                <label class="dialog__label">
                    "Message Key"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || form.get().message_key
                        disabled=move || edit_mode.get()
                        on:input=move |ev| form.update(|f| f.message_key = event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Message Name"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || form.get().message_name
                        on:input=move |ev| form.update(|f| f.message_name = event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Category"
                    <select
                        class="dialog__input"
                        prop:value=move || form.get().category
                        on:change=move |ev| form.update(|f| f.category = event_target_value(&ev))
                    >
                        {Category::ALL
                            .iter()
                            .map(|category| {
                                view! { <option value=category.as_str()>{category.as_str()}</option> }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <label class="dialog__label">
                    "Description"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || form.get().description
                        on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Variables (comma-separated)"
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="version,time,user_id,handle"
                        prop:value=move || form.get().variables
                        on:input=move |ev| form.update(|f| f.variables = event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Content"
                    <textarea
                        class="dialog__input dialog__textarea"
                        rows="12"
                        prop:value=move || form.get().content
                        on:input=move |ev| form.update(|f| f.content = event_target_value(&ev))
                    ></textarea>
                </label>
                <label class="dialog__check">
                    <input
                        type="checkbox"
                        prop:checked=move || form.get().is_active
                        on:change=move |ev| form.update(|f| f.is_active = event_target_checked(&ev))
                    />
                    {move || translate(ui.get().lang, "common.active")}
                </label>
                <div class="dialog__preview">
                    <span class="dialog__preview-title">
                        {move || translate(ui.get().lang, "messages.preview")}
                    </span>
                    <pre class="dialog__preview-body">{preview_text}</pre>
                </div>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| submit.run(())>
                        {move || translate(ui.get().lang, "common.save")}
                    </button>
                </div>
            </div>
        </div>
    }
}
