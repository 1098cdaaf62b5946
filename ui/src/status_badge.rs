use dioxus::prelude::*;

/// A small colored dot plus label. `tone` selects the css accent
/// (e.g. "success", "warning", "neutral").
#[component]
pub fn StatusBadge(label: String, tone: String) -> Element {
    rsx! {
        span { class: "status-badge status-badge-{tone}",
            span { class: "status-badge-dot" }
            "{label}"
        }
    }
}
