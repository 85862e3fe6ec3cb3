//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod views;

pub const THEME_CSS: Asset = asset!("/assets/theme.css");

mod config;
pub use config::{load_config, make_source, use_dashboard_config};

mod shell;
pub use shell::AppShell;

pub mod activity_log;
pub use activity_log::{ActivityLog, LogLevel, log_activity, use_activity_log};

mod activity_log_panel;
pub use activity_log_panel::{ActivityLogPanel, ActivityLogToggle};

mod user_list;
pub use user_list::{load_users, use_search_box, use_user_list};

mod search_input;
pub use search_input::SearchInput;

mod users_table;
pub use users_table::UsersTable;

mod pagination_bar;
pub use pagination_bar::PaginationBar;

mod load_error_banner;
pub use load_error_banner::LoadErrorBanner;
