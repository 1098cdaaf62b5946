use dioxus::prelude::*;
use types::PAGE_SIZE;

/// Previous/next pagination bar. `page` is 1-indexed here; the controller
/// converts back to its 0-indexed form.
#[component]
pub fn Pagination(
    page: u32,
    total_count: usize,
    disabled: bool,
    on_change: EventHandler<u32>,
) -> Element {
    let page_count = total_count.div_ceil(PAGE_SIZE).max(1) as u32;

    rsx! {
        div { class: "pagination",
            button {
                class: "btn btn-secondary",
                disabled: disabled || page <= 1,
                onclick: move |_| on_change.call(page - 1),
                "Previous"
            }
            span { class: "pagination-label", "Page {page} of {page_count}" }
            button {
                class: "btn btn-secondary",
                disabled: disabled || page >= page_count,
                onclick: move |_| on_change.call(page + 1),
                "Next"
            }
        }
    }
}
