use dioxus::prelude::*;
use types::{Controller, ControllerAction, Order, Page, Property, PropertyType};
use ui::{
    FilterDialog, Pagination, QueryInput, ResourceError, ResourceUnavailable, SortHeader,
    StatusBadge, ViewOption, ViewTabs,
};

use crate::Route;
use crate::fetch::{FetchGate, FetchState};
use crate::views::{format_date, format_money, order_tone};

const VIEWS: [ViewOption; 5] = [
    ViewOption {
        label: "All",
        value: "all",
    },
    ViewOption {
        label: "Placed",
        value: "placed",
    },
    ViewOption {
        label: "Processed",
        value: "processed",
    },
    ViewOption {
        label: "Delivered",
        value: "delivered",
    },
    ViewOption {
        label: "Complete",
        value: "complete",
    },
];

fn filter_properties() -> Vec<Property> {
    vec![
        Property::new("number", "Order number", PropertyType::String),
        Property::new("customerName", "Customer", PropertyType::String),
        Property::new("status", "Status", PropertyType::String),
        Property::new("totalAmount", "Total", PropertyType::Number),
        Property::new("createdAt", "Placed on", PropertyType::Date),
    ]
}

#[component]
pub fn Orders() -> Element {
    let mut controller = use_signal(|| Controller {
        sort_by: "createdAt".into(),
        ..Controller::default()
    });
    let mut state = use_signal(|| FetchState::<Page<Order>>::Loading);
    let mut gate = use_signal(FetchGate::new);
    let mut show_filter_dialog = use_signal(|| false);

    use_effect(move || {
        let snapshot = controller();
        let ticket = gate.write().issue();
        state.set(FetchState::Loading);
        spawn(async move {
            let result = api::list_orders(snapshot).await;
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
                h1 { class: "page-title", "Orders" }
                p { class: "page-subtitle", "Every order, from placed to complete." }
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
                        div { class: "loading", "Loading orders..." }
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
                                            label: "Number",
                                            column: "number",
                                            sort_by: controller.read().sort_by.clone(),
                                            sort: controller.read().sort,
                                            on_sort: move |column| dispatch(ControllerAction::SortChanged(column)),
                                        }
                                        SortHeader {
                                            label: "Customer",
                                            column: "customerName",
                                            sort_by: controller.read().sort_by.clone(),
                                            sort: controller.read().sort,
                                            on_sort: move |column| dispatch(ControllerAction::SortChanged(column)),
                                        }
                                        th { "Status" }
                                        SortHeader {
                                            label: "Total",
                                            column: "totalAmount",
                                            sort_by: controller.read().sort_by.clone(),
                                            sort: controller.read().sort,
                                            on_sort: move |column| dispatch(ControllerAction::SortChanged(column)),
                                        }
                                        SortHeader {
                                            label: "Placed",
                                            column: "createdAt",
                                            sort_by: controller.read().sort_by.clone(),
                                            sort: controller.read().sort,
                                            on_sort: move |column| dispatch(ControllerAction::SortChanged(column)),
                                        }
                                    }
                                }
                                tbody {
                                    for order in page.items.iter() {
                                        {
                                            let customer_id = order.customer_id;
                                            rsx! {
                                                tr {
                                                    onclick: move |_| {
                                                        navigator().push(Route::customer_detail(customer_id));
                                                    },
                                                    td { span { class: "mono", "{order.number}" } }
                                                    td { "{order.customer_name}" }
                                                    td {
                                                        StatusBadge {
                                                            label: order.status.label().to_string(),
                                                            tone: order_tone(order.status).to_string(),
                                                        }
                                                    }
                                                    td { {format_money(order.total_amount, &order.currency)} }
                                                    td { {format_date(order.created_at)} }
                                                }
                                            }
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
