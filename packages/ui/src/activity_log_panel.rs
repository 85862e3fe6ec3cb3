use dioxus::prelude::*;

use crate::activity_log::{LogEntry, LogLevel, use_activity_log};

const ACTIVITY_LOG_CSS: Asset = asset!("/assets/styling/activity_log.css");

/// Floating panel listing what the dashboard did, newest first.
#[component]
pub fn ActivityLogPanel() -> Element {
    let mut log = use_activity_log();
    let mut problems_only = use_signal(|| false);

    if !log.read().visible {
        return rsx! {};
    }

    let problems = problems_only();
    let entries: Vec<LogEntry> = log
        .read()
        .entries
        .iter()
        .rev()
        .filter(|e| !problems || matches!(e.level, LogLevel::Warning | LogLevel::Error))
        .cloned()
        .collect();
    let total = log.read().entries.len();

    rsx! {
        document::Stylesheet { href: ACTIVITY_LOG_CSS }

        div {
            class: "activity-log-panel",
            div {
                class: "activity-log-header",
                span { "Activity ({total})" }
                div {
                    class: "activity-log-header-actions",
                    label {
                        class: "activity-log-filter",
                        input {
                            r#type: "checkbox",
                            checked: problems,
                            onchange: move |_| problems_only.set(!problems_only()),
                        }
                        "Problems"
                    }
                    button {
                        onclick: move |_| log.write().entries.clear(),
                        "Clear"
                    }
                    button {
                        onclick: move |_| log.write().visible = false,
                        "Close"
                    }
                }
            }
            div {
                class: "activity-log-entries",
                if entries.is_empty() {
                    div { class: "activity-log-empty", "Nothing to show." }
                }
                for entry in entries {
                    div {
                        class: level_class(entry.level),
                        span { class: "activity-log-time", "{entry.timestamp}" }
                        span { " {entry.message}" }
                    }
                }
            }
        }
    }
}

fn level_class(level: LogLevel) -> &'static str {
    match level {
        LogLevel::Error => "activity-log-entry error",
        LogLevel::Warning => "activity-log-entry warning",
        LogLevel::Success => "activity-log-entry success",
        LogLevel::Info => "activity-log-entry info",
    }
}

/// App-bar button that shows or hides the panel. Turns red once anything failed.
#[component]
pub fn ActivityLogToggle() -> Element {
    let mut log = use_activity_log();
    let has_errors = log.read().has_errors();

    rsx! {
        button {
            class: if has_errors { "activity-log-toggle has-errors" } else { "activity-log-toggle" },
            title: "Activity log",
            onclick: move |_| {
                let visible = log.read().visible;
                log.write().visible = !visible;
            },
            if has_errors { "Log !" } else { "Log" }
        }
    }
}
