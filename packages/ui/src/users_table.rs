use dioxus::prelude::*;
use store::{EditField, LoadState, SelectionState, UserRecord};

use crate::activity_log::{LogLevel, log_activity, use_activity_log};
use crate::icons::{FaCheck, FaPenToSquare, FaTrashCan, FaXmark};
use crate::user_list::{use_search_box, use_user_list};
use crate::{Icon, LoadErrorBanner, PaginationBar};

const TABLE_CSS: Asset = asset!("/assets/styling/users_table.css");

/// The users table: selection toolbar, header, current page rows and pager.
///
/// Expects `Signal<UserList>` and `Signal<SearchBox>` in context. Re-filters
/// when the search box raises a request.
#[component]
pub fn UsersTable(
    /// Offered in the rows-per-page picker.
    page_size_options: Vec<usize>,
    /// Called from the error banner after a failed load.
    on_retry: EventHandler<()>,
) -> Element {
    let mut list = use_user_list();
    let mut search = use_search_box();
    let mut activity_log = use_activity_log();

    // Filtering runs on submit only, never per keystroke.
    use_effect(move || {
        if !search.read().is_requested() {
            return;
        }
        let request = search.write().take_request();
        if let Some(query) = request {
            list.write().search(&query, true);
            let found = list.peek().filtered().len();
            log_activity(
                &mut activity_log,
                LogLevel::Info,
                &format!("Search \"{query}\": {found} users"),
            );
        }
    });

    let snapshot = list();
    let selected_count = snapshot.selected().len();
    let selection = snapshot.selection_state();
    let page_empty = snapshot.page().is_empty();

    let status = match snapshot.load_state() {
        LoadState::Idle | LoadState::Loading => Some("Loading..."),
        LoadState::Failed(_) => Some("Users could not be loaded."),
        LoadState::Loaded if page_empty => Some("No data found."),
        LoadState::Loaded => None,
    };

    let delete_selected = move |_| {
        let removed = list.write().delete_selected();
        if removed > 0 {
            log_activity(
                &mut activity_log,
                LogLevel::Info,
                &format!("Deleted {removed} selected users"),
            );
        }
    };

    rsx! {
        document::Stylesheet { href: TABLE_CSS }

        div {
            class: "users-table",

            if let LoadState::Failed(message) = snapshot.load_state() {
                LoadErrorBanner { message: message.clone(), on_retry: on_retry }
            }

            if selected_count > 0 {
                div {
                    class: "selection-toolbar",
                    span { class: "selection-count", "{selected_count} selected" }
                    button {
                        class: "delete-selected",
                        onclick: delete_selected,
                        "Delete Selected"
                    }
                }
            }

            table {
                thead {
                    tr {
                        th {
                            class: "select-cell",
                            input {
                                r#type: "checkbox",
                                class: if selection == SelectionState::Partial { "indeterminate" } else { "" },
                                title: "Select all on this page",
                                checked: selection == SelectionState::All,
                                disabled: page_empty,
                                onchange: move |_| list.write().toggle_select_all(),
                            }
                        }
                        th { "ID" }
                        th { "Name" }
                        th { "Email" }
                        th { "Role" }
                        th { "Actions" }
                    }
                }
                tbody {
                    if let Some(message) = status {
                        tr {
                            class: "status-row",
                            td { colspan: "6", "{message}" }
                        }
                    } else {
                        for user in snapshot.page().iter().cloned() {
                            if let Some(draft) = snapshot.editing().filter(|d| d.id == user.id) {
                                EditRow {
                                    key: "{user.id}",
                                    draft: draft.clone(),
                                    selected: snapshot.is_selected(&user.id),
                                }
                            } else {
                                UserRow {
                                    key: "{user.id}",
                                    selected: snapshot.is_selected(&user.id),
                                    user: user.clone(),
                                }
                            }
                        }
                    }
                }
            }

            PaginationBar { page_size_options: page_size_options }
        }
    }
}

#[component]
fn SelectCell(id: String, selected: bool) -> Element {
    let mut list = use_user_list();

    rsx! {
        td {
            class: "select-cell",
            input {
                r#type: "checkbox",
                checked: selected,
                onchange: move |_| list.write().toggle_select(&id),
            }
        }
    }
}

#[component]
fn UserRow(user: UserRecord, selected: bool) -> Element {
    let mut list = use_user_list();
    let mut activity_log = use_activity_log();

    let edit_id = user.id.clone();
    let delete_id = user.id.clone();

    rsx! {
        tr {
            class: if selected { "user-row selected" } else { "user-row" },
            SelectCell { id: user.id.clone(), selected: selected }
            td { "{user.id}" }
            td { "{user.name}" }
            td { "{user.email}" }
            td { "{user.role}" }
            td {
                class: "row-actions",
                button {
                    class: "edit",
                    title: "Edit",
                    onclick: move |_| {
                        list.write().begin_edit(&edit_id);
                    },
                    Icon { icon: FaPenToSquare, width: 14, height: 14 }
                }
                button {
                    class: "delete",
                    title: "Delete",
                    onclick: move |_| {
                        if list.write().delete_one(&delete_id) {
                            log_activity(
                                &mut activity_log,
                                LogLevel::Info,
                                &format!("Deleted user {delete_id}"),
                            );
                        }
                    },
                    Icon { icon: FaTrashCan, width: 14, height: 14 }
                }
            }
        }
    }
}

/// A row in inline-edit mode. Inputs write to the working copy only.
#[component]
fn EditRow(draft: UserRecord, selected: bool) -> Element {
    let mut list = use_user_list();
    let mut activity_log = use_activity_log();

    let save = move |_| {
        let committed = list.write().commit_edit();
        if let Some(user) = committed {
            log_activity(
                &mut activity_log,
                LogLevel::Success,
                &format!("Saved user {}", user.id),
            );
        }
    };

    rsx! {
        tr {
            class: if selected { "user-row editing selected" } else { "user-row editing" },
            SelectCell { id: draft.id.clone(), selected: selected }
            td { "{draft.id}" }
            for field in EditField::ALL {
                td {
                    key: "{field}",
                    input {
                        r#type: "text",
                        name: field.key(),
                        value: draft.field(field).to_string(),
                        oninput: move |evt: FormEvent| list.write().update_edit_field(field, evt.value()),
                        onkeydown: move |evt: KeyboardEvent| {
                            if evt.key() == Key::Escape {
                                list.write().cancel_edit();
                            }
                        },
                    }
                }
            }
            td {
                class: "row-actions",
                button {
                    class: "cancel",
                    title: "Cancel",
                    onclick: move |_| list.write().cancel_edit(),
                    Icon { icon: FaXmark, width: 14, height: 14 }
                }
                button {
                    class: "save",
                    title: "Save",
                    onclick: save,
                    Icon { icon: FaCheck, width: 14, height: 14 }
                }
            }
        }
    }
}
