use dioxus::prelude::*;

#[component]
pub fn PropertyList(children: Element) -> Element {
    rsx! {
        dl { class: "property-list", {children} }
    }
}

#[component]
pub fn PropertyListItem(label: String, value: String) -> Element {
    rsx! {
        div { class: "property-list-item",
            dt { class: "property-list-label", "{label}" }
            dd { class: "property-list-value", "{value}" }
        }
    }
}
