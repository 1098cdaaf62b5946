use dioxus::prelude::*;

/// A named view tab; `value` is what the controller carries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewOption {
    pub label: &'static str,
    pub value: &'static str,
}

#[component]
pub fn ViewTabs(
    views: Vec<ViewOption>,
    current: String,
    disabled: bool,
    on_change: EventHandler<String>,
) -> Element {
    rsx! {
        div { class: "view-tabs",
            for view in views {
                button {
                    class: if current == view.value { "view-tab active" } else { "view-tab" },
                    disabled,
                    onclick: move |_| on_change.call(view.value.to_string()),
                    "{view.label}"
                }
            }
        }
    }
}
