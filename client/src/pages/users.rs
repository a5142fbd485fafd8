//! Users page: account table with create, edit, and delete dialogs.
//!
//! SYSTEM CONTEXT
//! ==============
//! Accounts live in the external admin backend; this page is fetch-render-
//! mutate-refetch with no local source of truth beyond the shared context.

use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::net::types::UserRecord;
use crate::state::ui::UiState;
use crate::state::users::UsersState;
use crate::util::format::format_timestamp_or;
use crate::util::i18n::translate;

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

/// Form backing both the create and edit dialogs.
#[derive(Clone, Debug, PartialEq)]
struct UserForm {
    user_id: String,
    password: String,
    handle_name: String,
    email: String,
    level: i64,
    is_active: bool,
    must_change_password: bool,
}

impl Default for UserForm {
    fn default() -> Self {
        Self {
            user_id: String::new(),
            password: String::new(),
            handle_name: String::new(),
            email: String::new(),
            level: 1,
            is_active: true,
            must_change_password: false,
        }
    }
}

impl UserForm {
    fn from_record(user: &UserRecord) -> Self {
        Self {
            user_id: user.user_id.clone(),
            password: String::new(),
            handle_name: user.handle_name.clone(),
            email: user.email.clone().unwrap_or_default(),
            level: user.level,
            is_active: user.is_active,
            must_change_password: user.must_change_password_on_next_login,
        }
    }
}

/// JSON body for `POST /api/admin/users`.
fn user_create_payload(form: &UserForm) -> serde_json::Value {
    serde_json::json!({
        "user_id": form.user_id.trim(),
        "password": form.password,
        "handle_name": form.handle_name.trim(),
        "email": optional_field(&form.email),
        "level": form.level,
        "is_active": form.is_active,
        "must_change_password_on_next_login": form.must_change_password,
    })
}

/// JSON body for `PUT /api/admin/users/{user_id}`. A blank password means
/// "keep current" and is omitted entirely.
fn user_update_payload(form: &UserForm) -> serde_json::Value {
    let mut payload = serde_json::json!({
        "handle_name": form.handle_name.trim(),
        "email": optional_field(&form.email),
        "level": form.level,
        "is_active": form.is_active,
        "must_change_password_on_next_login": form.must_change_password,
    });
    if !form.password.is_empty() {
        payload["password"] = serde_json::Value::String(form.password.clone());
    }
    payload
}

fn optional_field(raw: &str) -> serde_json::Value {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::Value::String(trimmed.to_owned())
    }
}

/// Parse a level input, clamping to the backend's 0-9 range.
fn parse_level(raw: &str, fallback: i64) -> i64 {
    raw.trim()
        .parse::<i64>()
        .map(|level| level.clamp(0, 9))
        .unwrap_or(fallback)
}

fn load_users(users: RwSignal<UsersState>) {
    users.update(|s| s.loading = true);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_users().await {
            Ok(items) => users.update(|s| {
                s.items = items;
                s.loading = false;
                s.error = None;
            }),
            Err(e) => users.update(|s| {
                s.loading = false;
                s.error = Some(e);
            }),
        }
    });
}

/// Users page with account table and CRUD dialogs.
#[component]
pub fn UsersPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let users = expect_context::<RwSignal<UsersState>>();

    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() {
            return;
        }
        requested.set(true);
        load_users(users);
    });

    let show_dialog = RwSignal::new(false);
    let edit_mode = RwSignal::new(false);
    let form = RwSignal::new(UserForm::default());
    let delete_target = RwSignal::new(None::<String>);

    let on_add = move |_| {
        edit_mode.set(false);
        form.set(UserForm::default());
        show_dialog.set(true);
    };
    let on_edit = Callback::new(move |user: UserRecord| {
        edit_mode.set(true);
        form.set(UserForm::from_record(&user));
        show_dialog.set(true);
    });
    let on_cancel = Callback::new(move |()| show_dialog.set(false));
    let on_delete_cancel = Callback::new(move |()| delete_target.set(None));
    let on_delete_confirm = Callback::new(move |()| {
        let Some(user_id) = delete_target.get_untracked() else {
            return;
        };
        delete_target.set(None);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_user(&user_id).await {
                Ok(()) => load_users(users),
                Err(e) => users.update(|s| s.error = Some(e)),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = user_id;
    });

    view! {
        <div class="page">
            <header class="page__header">
                <h1>{move || translate(ui.get().lang, "nav.users")}</h1>
                <button class="btn btn--primary" on:click=on_add>
                    {move || translate(ui.get().lang, "users.add")}
                </button>
            </header>

            <Show when=move || users.get().error.is_some()>
                <p class="page__error">{move || users.get().error.unwrap_or_default()}</p>
            </Show>

            <Show
                when=move || !users.get().loading
                fallback=move || {
                    view! { <p class="page__loading">{move || translate(ui.get().lang, "common.loading")}</p> }
                }
            >
                <div class="table-wrap">
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"User ID"</th>
                                <th>"Handle Name"</th>
                                <th>"Email"</th>
                                <th>"Level"</th>
                                <th>"Last Login"</th>
                                <th>{move || translate(ui.get().lang, "common.actions")}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                users
                                    .get()
                                    .items
                                    .into_iter()
                                    .map(|user| {
                                        let edit_record = user.clone();
                                        let delete_id = user.user_id.clone();
                                        let never = translate(ui.get().lang, "common.never").to_owned();
                                        view! {
                                            <tr>
                                                <td class="data-table__mono">{user.user_id.clone()}</td>
                                                <td>{user.handle_name.clone()}</td>
                                                <td>{user.email.clone().unwrap_or_else(|| "-".to_owned())}</td>
                                                <td>{user.level}</td>
                                                <td>{format_timestamp_or(user.last_login.as_deref(), &never)}</td>
                                                <td>
                                                    <button
                                                        class="btn btn--small"
                                                        on:click=move |_| on_edit.run(edit_record.clone())
                                                    >
                                                        "Edit"
                                                    </button>
                                                    <button
                                                        class="btn btn--small btn--danger"
                                                        on:click=move |_| delete_target.set(Some(delete_id.clone()))
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
                <UserDialog form=form edit_mode=edit_mode on_cancel=on_cancel users=users/>
            </Show>
            <Show when=move || delete_target.get().is_some()>
                <ConfirmDialog
                    title="Delete User".to_owned()
                    message="This will permanently delete the account and its mail.".to_owned()
                    confirm_label="Delete".to_owned()
                    on_cancel=on_delete_cancel
                    on_confirm=on_delete_confirm
                />
            </Show>
        </div>
    }
}

/// Modal dialog for creating or editing an account. The user id is immutable
/// once created; an empty password on edit keeps the current one.
#[component]
fn UserDialog(
    form: RwSignal<UserForm>,
    edit_mode: RwSignal<bool>,
    on_cancel: Callback<()>,
    users: RwSignal<UsersState>,
) -> impl IntoView {
    let submit = Callback::new(move |()| {
        let current = form.get_untracked();
        if current.user_id.trim().is_empty() || current.handle_name.trim().is_empty() {
            return;
        }
        let editing = edit_mode.get_untracked();
        if !editing && current.password.is_empty() {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = if editing {
                crate::net::api::update_user(current.user_id.trim(), &user_update_payload(&current))
                    .await
                    .map(|_| ())
            } else {
                crate::net::api::create_user(&user_create_payload(&current))
                    .await
                    .map(|_| ())
            };
            match result {
                Ok(()) => load_users(users),
                Err(e) => users.update(|s| s.error = Some(e)),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (current, editing, users);
        on_cancel.run(());
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{move || if edit_mode.get() { "Edit User" } else { "Create New User" }}</h2>
                <label class="dialog__label">
                    "User ID"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || form.get().user_id
                        disabled=move || edit_mode.get()
                        on:input=move |ev| form.update(|f| f.user_id = event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Password"
                    <input
                        class="dialog__input"
                        type="password"
                        placeholder=move || {
                            if edit_mode.get() { "Leave empty to keep current password" } else { "" }
                        }
                        prop:value=move || form.get().password
                        on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Handle Name"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || form.get().handle_name
                        on:input=move |ev| form.update(|f| f.handle_name = event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Email"
                    <input
                        class="dialog__input"
                        type="email"
                        prop:value=move || form.get().email
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Level (0-9)"
                    <input
                        class="dialog__input"
                        type="number"
                        min="0"
                        max="9"
                        prop:value=move || form.get().level.to_string()
                        on:input=move |ev| {
                            let raw = event_target_value(&ev);
                            form.update(|f| f.level = parse_level(&raw, f.level));
                        }
                    />
                </label>
                <label class="dialog__check">
                    <input
                        type="checkbox"
                        prop:checked=move || form.get().is_active
                        on:change=move |ev| form.update(|f| f.is_active = event_target_checked(&ev))
                    />
                    "Active (uncheck to temporarily disable user)"
                </label>
                <label class="dialog__check">
                    <input
                        type="checkbox"
                        prop:checked=move || form.get().must_change_password
                        on:change=move |ev| {
                            form.update(|f| f.must_change_password = event_target_checked(&ev));
                        }
                    />
                    "Require password change on next login"
                </label>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| submit.run(())>
                        {move || if edit_mode.get() { "Update User" } else { "Create User" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
