use dioxus::prelude::*;
use store::{SearchBox, UserList};

use crate::{
    ActivityLogPanel, AppShell, SearchInput, UsersTable,
    load_users, make_source, use_activity_log, use_dashboard_config,
};

/// The users page shared by every platform.
///
/// Owns the list state: provides `Signal<UserList>` and `Signal<SearchBox>` via
/// context and loads the members document once on mount. A failed load stays
/// on screen until the user retries.
#[component]
pub fn DashboardView() -> Element {
    let config = use_dashboard_config();
    let page_size = config.table.page_size;
    let page_size_options = config.table.size_choices();

    let mut list: Signal<UserList> =
        use_context_provider(|| Signal::new(UserList::new(page_size)));
    let _search: Signal<SearchBox> = use_context_provider(|| Signal::new(SearchBox::new()));
    let activity_log = use_activity_log();

    let mut loader = use_resource(move || {
        let config = config.clone();
        async move {
            match make_source(&config) {
                Ok(source) => load_users(list, &source, activity_log).await,
                Err(e) => {
                    tracing::error!("Could not create HTTP client: {}", e);
                    list.write().finish_load(Err(e));
                }
            }
        }
    });

    rsx! {
        AppShell {
            div {
                class: "dashboard",
                SearchInput {}
                UsersTable {
                    page_size_options: page_size_options,
                    on_retry: move |_| loader.restart(),
                }
            }
            ActivityLogPanel {}
        }
    }
}
