//! Visible replacement for a silently failed load.

use dioxus::prelude::*;

use crate::icons::FaTriangleExclamation;
use crate::Icon;

/// Error strip shown above the table when the members document could not be
/// fetched, with a button to try again.
#[component]
pub fn LoadErrorBanner(message: String, on_retry: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "load-error-banner",
            role: "alert",
            Icon { icon: FaTriangleExclamation, width: 14, height: 14 }
            span { class: "load-error-message", "Could not load users: {message}" }
            button {
                class: "load-error-retry",
                onclick: move |_| on_retry.call(()),
                "Retry"
            }
        }
    }
}
