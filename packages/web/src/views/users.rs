use dioxus::prelude::*;

use ui::views::DashboardView;

#[component]
pub fn Users() -> Element {
    rsx! {
        DashboardView {}
    }
}
