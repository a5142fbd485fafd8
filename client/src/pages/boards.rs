//! Boards page: message-board table with create, edit, and delete dialogs.

use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::net::types::BoardRecord;
use crate::state::boards::BoardsState;
use crate::state::ui::UiState;
use crate::util::i18n::translate;

#[cfg(test)]
#[path = "boards_test.rs"]
mod boards_test;

/// Form backing both the create and edit dialogs.
#[derive(Clone, Debug, PartialEq)]
struct BoardForm {
    board_id: i64,
    name: String,
    description: String,
    read_level: i64,
    write_level: i64,
}

impl Default for BoardForm {
    fn default() -> Self {
        Self {
            board_id: 0,
            name: String::new(),
            description: String::new(),
            read_level: 0,
            write_level: 1,
        }
    }
}

impl BoardForm {
    fn from_record(board: &BoardRecord) -> Self {
        Self {
            board_id: board.board_id,
            name: board.name.clone(),
            description: board.description.clone().unwrap_or_default(),
            read_level: board.read_level,
            write_level: board.write_level,
        }
    }
}

/// JSON body for `POST /api/admin/boards`.
fn board_create_payload(form: &BoardForm) -> serde_json::Value {
    serde_json::json!({
        "board_id": form.board_id,
        "name": form.name.trim(),
        "description": optional_field(&form.description),
        "read_level": form.read_level,
        "write_level": form.write_level,
    })
}

/// JSON body for `PUT /api/admin/boards/{board_id}`; the numeric id lives in
/// the path, not the body.
fn board_update_payload(form: &BoardForm) -> serde_json::Value {
    serde_json::json!({
        "name": form.name.trim(),
        "description": optional_field(&form.description),
        "read_level": form.read_level,
        "write_level": form.write_level,
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

/// Parse a non-negative numeric input, keeping the fallback on garbage.
fn parse_number(raw: &str, fallback: i64) -> i64 {
    raw.trim()
        .parse::<i64>()
        .map(|value| value.max(0))
        .unwrap_or(fallback)
}

fn load_boards(boards: RwSignal<BoardsState>) {
    boards.update(|s| s.loading = true);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_boards().await {
            Ok(items) => boards.update(|s| {
                s.items = items;
                s.loading = false;
                s.error = None;
            }),
            Err(e) => boards.update(|s| {
                s.loading = false;
                s.error = Some(e);
            }),
        }
    });
}

/// Boards page with board table and CRUD dialogs.
#[component]
pub fn BoardsPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let boards = expect_context::<RwSignal<BoardsState>>();

    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() {
            return;
        }
        requested.set(true);
        load_boards(boards);
    });

    let show_dialog = RwSignal::new(false);
    let edit_mode = RwSignal::new(false);
    let form = RwSignal::new(BoardForm::default());
    let delete_target = RwSignal::new(None::<i64>);

    let on_add = move |_| {
        edit_mode.set(false);
        form.set(BoardForm::default());
        show_dialog.set(true);
    };
    let on_edit = Callback::new(move |board: BoardRecord| {
        edit_mode.set(true);
        form.set(BoardForm::from_record(&board));
        show_dialog.set(true);
    });
    let on_cancel = Callback::new(move |()| show_dialog.set(false));
    let on_delete_cancel = Callback::new(move |()| delete_target.set(None));
    let on_delete_confirm = Callback::new(move |()| {
        let Some(board_id) = delete_target.get_untracked() else {
            return;
        };
        delete_target.set(None);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_board(board_id).await {
                Ok(()) => load_boards(boards),
                Err(e) => boards.update(|s| s.error = Some(e)),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = board_id;
    });

    view! {
        <div class="page">
            <header class="page__header">
                <h1>{move || translate(ui.get().lang, "nav.boards")}</h1>
                <button class="btn btn--primary" on:click=on_add>
                    {move || translate(ui.get().lang, "boards.add")}
                </button>
            </header>

            <Show when=move || boards.get().error.is_some()>
                <p class="page__error">{move || boards.get().error.unwrap_or_default()}</p>
            </Show>

            <Show
                when=move || !boards.get().loading
                fallback=move || {
                    view! { <p class="page__loading">{move || translate(ui.get().lang, "common.loading")}</p> }
                }
            >
                <div class="table-wrap">
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Board ID"</th>
                                <th>"Name"</th>
                                <th>"Description"</th>
                                <th>"Read Level"</th>
                                <th>"Write Level"</th>
                                <th>"Status"</th>
                                <th>{move || translate(ui.get().lang, "common.actions")}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                boards
                                    .get()
                                    .items
                                    .into_iter()
                                    .map(|board| {
                                        let edit_record = board.clone();
                                        let delete_id = board.board_id;
                                        let status_key = if board.is_active {
                                            "common.active"
                                        } else {
                                            "common.inactive"
                                        };
                                        let status_class = if board.is_active {
                                            "chip chip--success"
                                        } else {
                                            "chip"
                                        };
                                        view! {
                                            <tr>
                                                <td>{board.board_id}</td>
                                                <td>{board.name.clone()}</td>
                                                <td>{board.description.clone().unwrap_or_else(|| "-".to_owned())}</td>
                                                <td>{board.read_level}</td>
                                                <td>{board.write_level}</td>
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
                                                        on:click=move |_| delete_target.set(Some(delete_id))
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
                <BoardDialog form=form edit_mode=edit_mode on_cancel=on_cancel boards=boards/>
            </Show>
            <Show when=move || delete_target.get().is_some()>
                <ConfirmDialog
                    title="Delete Board".to_owned()
                    message="本当にこのボードを削除しますか？投稿されたメッセージも失われます。".to_owned()
                    confirm_label="Delete".to_owned()
                    on_cancel=on_delete_cancel
                    on_confirm=on_delete_confirm
                />
            </Show>
        </div>
    }
}

/// Modal dialog for creating or editing a board. The numeric board id is
/// immutable once created.
#[component]
fn BoardDialog(
    form: RwSignal<BoardForm>,
    edit_mode: RwSignal<bool>,
    on_cancel: Callback<()>,
    boards: RwSignal<BoardsState>,
) -> impl IntoView {
    let submit = Callback::new(move |()| {
        let current = form.get_untracked();
        if current.name.trim().is_empty() {
            return;
        }
        let editing = edit_mode.get_untracked();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = if editing {
                crate::net::api::update_board(current.board_id, &board_update_payload(&current))
                    .await
                    .map(|_| ())
            } else {
                crate::net::api::create_board(&board_create_payload(&current))
                    .await
                    .map(|_| ())
            };
            match result {
                Ok(()) => load_boards(boards),
                Err(e) => boards.update(|s| s.error = Some(e)),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (current, editing, boards);
        on_cancel.run(());
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{move || if edit_mode.get() { "Edit Board" } else { "Create New Board" }}</h2>
                <label class="dialog__label">
                    "Board ID"
                    <input
                        class="dialog__input"
                        type="number"
                        min="0"
                        prop:value=move || form.get().board_id.to_string()
                        disabled=move || edit_mode.get()
                        on:input=move |ev| {
                            let raw = event_target_value(&ev);
                            form.update(|f| f.board_id = parse_number(&raw, f.board_id));
                        }
                    />
                </label>
                <label class="dialog__label">
                    "Name"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || form.get().name
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    />
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
                    "Read Level"
                    <input
                        class="dialog__input"
                        type="number"
                        min="0"
                        max="9"
                        prop:value=move || form.get().read_level.to_string()
                        on:input=move |ev| {
                            let raw = event_target_value(&ev);
                            form.update(|f| f.read_level = parse_number(&raw, f.read_level).min(9));
                        }
                    />
                </label>
                <label class="dialog__label">
                    "Write Level"
                    <input
                        class="dialog__input"
                        type="number"
                        min="0"
                        max="9"
                        prop:value=move || form.get().write_level.to_string()
                        on:input=move |ev| {
                            let raw = event_target_value(&ev);
                            form.update(|f| f.write_level = parse_number(&raw, f.write_level).min(9));
                        }
                    />
                </label>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| submit.run(())>
                        {move || if edit_mode.get() { "Update Board" } else { "Create Board" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
