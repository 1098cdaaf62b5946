use dioxus::prelude::*;

/// Shown when a listing fetch fails. The previous controller state is
/// still applied, so retrying the interaction recovers.
#[component]
pub fn ResourceError(#[props(default)] message: Option<String>) -> Element {
    let message = message.unwrap_or_else(|| "Something went wrong. Try again.".to_string());

    rsx! {
        div { class: "resource-placeholder resource-error",
            p { "{message}" }
        }
    }
}

/// Shown when a listing resolves to zero rows.
#[component]
pub fn ResourceUnavailable(#[props(default)] message: Option<String>) -> Element {
    let message = message.unwrap_or_else(|| "No records match the current view.".to_string());

    rsx! {
        div { class: "resource-placeholder resource-unavailable",
            p { "{message}" }
        }
    }
}
