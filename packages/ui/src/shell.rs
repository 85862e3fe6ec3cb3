use dioxus::prelude::*;

use crate::icons::{FaBars, FaUsers};
use crate::{ActivityLogToggle, Icon};

const SHELL_CSS: Asset = asset!("/assets/styling/shell.css");

/// Static chrome: app bar, "Admin" side drawer and the main content area.
///
/// The drawer is always shown on wide screens; on narrow ones the menu button
/// slides it in over a backdrop.
#[component]
pub fn AppShell(
    #[props(default = "Users".to_string())] title: String,
    children: Element,
) -> Element {
    let mut drawer_open = use_signal(|| false);

    rsx! {
        document::Stylesheet { href: SHELL_CSS }

        div {
            class: "app-shell",

            header {
                class: "app-bar",
                button {
                    class: "drawer-toggle",
                    title: "Open navigation",
                    onclick: move |_| drawer_open.set(!drawer_open()),
                    Icon { icon: FaBars, width: 16, height: 16 }
                }
                h1 { class: "app-bar-title", "{title}" }
                ActivityLogToggle {}
            }

            nav {
                class: if drawer_open() { "drawer open" } else { "drawer" },
                div {
                    class: "drawer-header",
                    span { "Admin" }
                }
                ul {
                    class: "drawer-nav",
                    li {
                        class: "drawer-item active",
                        Icon { icon: FaUsers, width: 14, height: 14 }
                        span { "Users" }
                    }
                }
            }

            if drawer_open() {
                div {
                    class: "drawer-backdrop",
                    onclick: move |_| drawer_open.set(false),
                }
            }

            main {
                class: "app-main",
                {children}
            }
        }
    }
}
