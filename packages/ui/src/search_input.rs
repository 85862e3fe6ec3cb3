use dioxus::prelude::*;

use crate::icons::FaMagnifyingGlass;
use crate::user_list::use_search_box;
use crate::Icon;

/// Free-text search box. Typing edits the draft; the search icon or Enter
/// submits it.
#[component]
pub fn SearchInput(
    #[props(default = "Search by name, email or role".to_string())] placeholder: String,
) -> Element {
    let mut search = use_search_box();

    rsx! {
        div {
            class: "search-input",
            input {
                id: "search-input",
                r#type: "text",
                placeholder: "{placeholder}",
                value: search.read().text().to_string(),
                oninput: move |evt: FormEvent| search.write().set_text(evt.value()),
                onkeydown: move |evt: KeyboardEvent| {
                    if evt.key() == Key::Enter {
                        search.write().submit();
                    }
                },
            }
            button {
                class: "search-icon",
                title: "Search",
                onclick: move |_| search.write().submit(),
                Icon { icon: FaMagnifyingGlass, width: 14, height: 14 }
            }
        }
    }
}
