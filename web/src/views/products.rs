use dioxus::prelude::*;
use types::{Controller, ControllerAction, Page, Product, Property, PropertyType};
use ui::{
    FilterDialog, Pagination, QueryInput, ResourceError, ResourceUnavailable, SortHeader,
    StatusBadge, ViewOption, ViewTabs,
};

use crate::fetch::{FetchGate, FetchState};
use crate::views::{format_date, format_money, product_tone};

const VIEWS: [ViewOption; 4] = [
    ViewOption {
        label: "All",
        value: "all",
    },
    ViewOption {
        label: "Published",
        value: "published",
    },
    ViewOption {
        label: "Draft",
        value: "draft",
    },
    ViewOption {
        label: "Archived",
        value: "archived",
    },
];

fn filter_properties() -> Vec<Property> {
    vec![
        Property::new("name", "Name", PropertyType::String),
        Property::new("sku", "SKU", PropertyType::String),
        Property::new("status", "Status", PropertyType::String),
        Property::new("price", "Price", PropertyType::Number),
        Property::new("stock", "In stock", PropertyType::Number),
        Property::new("createdAt", "Created", PropertyType::Date),
    ]
}

#[component]
pub fn Products() -> Element {
    let mut controller = use_signal(Controller::default);
    let mut state = use_signal(|| FetchState::<Page<Product>>::Loading);
    let mut gate = use_signal(FetchGate::new);
    let mut show_filter_dialog = use_signal(|| false);

    use_effect(move || {
        let snapshot = controller();
        let ticket = gate.write().issue();
        state.set(FetchState::Loading);
        spawn(async move {
            let result = api::list_products(snapshot).await;
            if !gate.peek().admits(ticket) {
                return;
            }
            match result {
                Ok(page) => state.set(FetchState::Loaded(page)),
                Err(e) => state.set(FetchState::Error(e.to_string())),
            }
        });
    });

    let dispatch = move |action: ControllerAction| {
        let next = controller.peek().apply(action);
        controller.set(next);
    };

    let is_loading = matches!(&*state.read(), FetchState::Loading);
    let has_filters = !controller.read().filters.is_empty();

    rsx! {
        div {
            div { class: "page-header",
                h1 { class: "page-title", "Products" }
                p { class: "page-subtitle", "The catalog, by publication status." }
            }
            div { class: "card",
                ViewTabs {
                    views: VIEWS.to_vec(),
                    current: controller.read().view.clone(),
                    disabled: is_loading,
                    on_change: move |view| dispatch(ControllerAction::ViewChanged(view)),
                }
                div { class: "list-toolbar",
                    QueryInput {
                        value: controller.read().query.clone(),
                        disabled: is_loading,
                        on_change: move |query| dispatch(ControllerAction::QueryChanged(query)),
                    }
                    button {
                        class: if has_filters { "btn btn-primary" } else { "btn btn-secondary" },
                        onclick: move |_| show_filter_dialog.set(true),
                        "Filter"
                    }
                }
                match &*state.read() {
                    FetchState::Loading => rsx! {
                        div { class: "loading", "Loading products..." }
                    },
                    FetchState::Error(message) => rsx! {
                        ResourceError { message: Some(message.clone()) }
                    },
                    FetchState::Loaded(page) if page.items.is_empty() => rsx! {
                        ResourceUnavailable {}
                    },
                    FetchState::Loaded(page) => rsx! {
                        div { class: "table-container",
                            table {
                                thead {
                                    tr {
                                        SortHeader {
                                            label: "Name",
                                            column: "name",
                                            sort_by: controller.read().sort_by.clone(),
                                            sort: controller.read().sort,
                                            on_sort: move |column| dispatch(ControllerAction::SortChanged(column)),
                                        }
                                        th { "SKU" }
                                        th { "Status" }
                                        SortHeader {
                                            label: "Price",
                                            column: "price",
                                            sort_by: controller.read().sort_by.clone(),
                                            sort: controller.read().sort,
                                            on_sort: move |column| dispatch(ControllerAction::SortChanged(column)),
                                        }
                                        SortHeader {
                                            label: "Stock",
                                            column: "stock",
                                            sort_by: controller.read().sort_by.clone(),
                                            sort: controller.read().sort,
                                            on_sort: move |column| dispatch(ControllerAction::SortChanged(column)),
                                        }
                                        SortHeader {
                                            label: "Updated",
                                            column: "updatedAt",
                                            sort_by: controller.read().sort_by.clone(),
                                            sort: controller.read().sort,
                                            on_sort: move |column| dispatch(ControllerAction::SortChanged(column)),
                                        }
                                    }
                                }
                                tbody {
                                    for product in page.items.iter() {
                                        tr {
                                            td { "{product.name}" }
                                            td { span { class: "mono", "{product.sku}" } }
                                            td {
                                                StatusBadge {
                                                    label: product.status.label().to_string(),
                                                    tone: product_tone(product.status).to_string(),
                                                }
                                            }
                                            td { {format_money(product.price, &product.currency)} }
                                            td { "{product.stock}" }
                                            td { {format_date(product.updated_at)} }
                                        }
                                    }
                                }
                            }
                        }
                        Pagination {
                            page: controller.read().page + 1,
                            total_count: page.total_count,
                            disabled: is_loading,
                            on_change: move |page| dispatch(ControllerAction::PageChanged(page)),
                        }
                    },
                }
            }
        }
        if *show_filter_dialog.read() {
            FilterDialog {
                properties: filter_properties(),
                filters: controller.read().filters.clone(),
                on_apply: move |filters| {
                    show_filter_dialog.set(false);
                    dispatch(ControllerAction::FiltersApplied(filters));
                },
                on_clear: move |_| {
                    show_filter_dialog.set(false);
                    dispatch(ControllerAction::FiltersCleared);
                },
                on_close: move |_| show_filter_dialog.set(false),
            }
        }
    }
}
