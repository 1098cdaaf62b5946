use dioxus::prelude::*;
use types::SortDir;

/// A sortable column header cell. Clicking reports the column name; the
/// owning screen decides how the sort toggles.
#[component]
pub fn SortHeader(
    label: String,
    column: String,
    sort_by: String,
    sort: SortDir,
    on_sort: EventHandler<String>,
) -> Element {
    let active = sort_by == column;
    let indicator = match (active, sort) {
        (true, SortDir::Asc) => " ↑",
        (true, SortDir::Desc) => " ↓",
        (false, _) => "",
    };
    let clicked = column.clone();

    rsx! {
        th {
            button {
                class: if active { "sort-header active" } else { "sort-header" },
                onclick: move |_| on_sort.call(clicked.clone()),
                "{label}{indicator}"
            }
        }
    }
}
