use dioxus::prelude::*;
use store::{SearchBox, UserList, UserSource};

use crate::activity_log::{ActivityLog, LogLevel, log_activity};

/// Consume the `Signal<UserList>` provided by `DashboardView`.
///
/// Every component that renders or mutates rows goes through this one signal,
/// so the table, toolbar and pager always agree on the current page.
pub fn use_user_list() -> Signal<UserList> {
    use_context::<Signal<UserList>>()
}

/// Consume the `Signal<SearchBox>` shared by the search input and the table.
pub fn use_search_box() -> Signal<SearchBox> {
    use_context::<Signal<SearchBox>>()
}

/// Run the one-time load of `list` from `source`.
///
/// The signal is only borrowed around the fetch, never across it. Does nothing
/// once a load has succeeded.
pub async fn load_users(
    mut list: Signal<UserList>,
    source: &impl UserSource,
    mut log: Signal<ActivityLog>,
) {
    if !list.write().begin_load() {
        return;
    }
    log_activity(&mut log, LogLevel::Info, "Loading users...");

    let result = source.fetch_users().await;
    match &result {
        Ok(users) => {
            log_activity(
                &mut log,
                LogLevel::Success,
                &format!("Loaded {} users", users.len()),
            );
        }
        Err(e) => {
            log_activity(&mut log, LogLevel::Error, &format!("Loading users failed: {e}"));
            #[cfg(target_arch = "wasm32")]
            web_sys::console::warn_1(&format!("Loading users failed: {e}").into());
        }
    }

    list.write().finish_load(result);
}
