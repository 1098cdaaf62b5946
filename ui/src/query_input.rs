use dioxus::prelude::*;

/// Free-text search box. Edits stay local until the user submits, so a
/// half-typed query never triggers a fetch.
#[component]
pub fn QueryInput(value: String, disabled: bool, on_change: EventHandler<String>) -> Element {
    let mut draft = use_signal(|| value.clone());

    rsx! {
        form {
            class: "query-form",
            onsubmit: move |e| {
                e.prevent_default();
                on_change.call(draft.peek().clone());
            },
            input {
                class: "form-input query-input",
                r#type: "search",
                placeholder: "Search…",
                disabled,
                value: "{draft}",
                oninput: move |e| draft.set(e.value()),
            }
            button {
                class: "btn btn-secondary",
                r#type: "submit",
                disabled,
                "Search"
            }
        }
    }
}
