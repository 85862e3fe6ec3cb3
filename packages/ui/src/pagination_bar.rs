use dioxus::prelude::*;

use crate::user_list::use_user_list;

/// Rows-per-page picker, position summary and First/Prev/1..n/Next/Last buttons.
#[component]
pub fn PaginationBar(page_size_options: Vec<usize>) -> Element {
    let mut list = use_user_list();
    let pager = list.read().pager();
    let summary = pager.summary();
    let first = pager.first();
    let last = pager.last();
    let at_last = pager.next().is_none();

    rsx! {
        div {
            class: "pagination-bar",
            label {
                class: "page-size",
                "Rows per page:"
                select {
                    value: "{pager.size}",
                    onchange: move |evt: FormEvent| {
                        if let Ok(size) = evt.value().parse::<usize>() {
                            list.write().set_page_size(size);
                        }
                    },
                    for size in page_size_options.iter().copied() {
                        option {
                            key: "{size}",
                            value: "{size}",
                            selected: size == pager.size,
                            "{size}"
                        }
                    }
                }
            }
            span { class: "page-summary", "{summary}" }
            div {
                class: "page-buttons",
                button {
                    class: "first-page",
                    disabled: pager.is_first(),
                    onclick: move |_| list.write().set_page(first),
                    "First"
                }
                button {
                    class: "previous-page",
                    disabled: pager.prev().is_none(),
                    onclick: move |_| {
                        if let Some(prev) = pager.prev() {
                            list.write().set_page(prev);
                        }
                    },
                    "Prev"
                }
                for (index, label) in pager.pages().map(|i| (i, i + 1)) {
                    button {
                        key: "{index}",
                        class: if index == pager.index { "page-number active" } else { "page-number" },
                        onclick: move |_| list.write().set_page(index),
                        "{label}"
                    }
                }
                button {
                    class: "next-page",
                    disabled: at_last,
                    onclick: move |_| {
                        if let Some(next) = pager.next() {
                            list.write().set_page(next);
                        }
                    },
                    "Next"
                }
                button {
                    class: "last-page",
                    onclick: move |_| list.write().set_page(last),
                    "Last"
                }
            }
        }
    }
}
