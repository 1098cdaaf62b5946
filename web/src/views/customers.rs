use dioxus::prelude::*;
use types::{
    Controller, ControllerAction, Customer, Page, Property, PropertyType,
};
use ui::{
    FilterDialog, Pagination, QueryInput, ResourceError, ResourceUnavailable, SortHeader,
    ViewOption, ViewTabs,
};

use crate::Route;
use crate::fetch::{FetchGate, FetchState};
use crate::views::{format_date, format_money};

const VIEWS: [ViewOption; 3] = [
    ViewOption {
        label: "All",
        value: "all",
    },
    ViewOption {
        label: "Returning",
        value: "isReturning",
    },
    ViewOption {
        label: "Ordered recently",
        value: "orderedRecently",
    },
];

fn filter_properties() -> Vec<Property> {
    vec![
        Property::new("fullName", "Name", PropertyType::String),
        Property::new("email", "Email", PropertyType::String),
        Property::new("phone", "Phone", PropertyType::String),
        Property::new("isReturning", "Returning", PropertyType::Bool),
        Property::new("ordersCount", "Orders placed", PropertyType::Number),
        Property::new("createdAt", "Created", PropertyType::Date),
    ]
}

#[component]
pub fn Customers() -> Element {
    let mut controller = use_signal(Controller::default);
    let mut state = use_signal(|| FetchState::<Page<Customer>>::Loading);
    let mut gate = use_signal(FetchGate::new);
    let mut show_filter_dialog = use_signal(|| false);

    // One fetch per controller change; a stale resolution is dropped at
    // the gate instead of clobbering newer data.
    use_effect(move || {
        let snapshot = controller();
        let ticket = gate.write().issue();
        state.set(FetchState::Loading);
        spawn(async move {
            let result = api::list_customers(snapshot).await;
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
                h1 { class: "page-title", "Customers" }
                p { class: "page-subtitle", "Search, filter, and inspect your customer base." }
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
                        div { class: "loading", "Loading customers..." }
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
                                            column: "fullName",
                                            sort_by: controller.read().sort_by.clone(),
                                            sort: controller.read().sort,
                                            on_sort: move |column| dispatch(ControllerAction::SortChanged(column)),
                                        }
                                        th { "Email" }
                                        th { "Phone" }
                                        SortHeader {
                                            label: "Orders",
                                            column: "ordersCount",
                                            sort_by: controller.read().sort_by.clone(),
                                            sort: controller.read().sort,
                                            on_sort: move |column| dispatch(ControllerAction::SortChanged(column)),
                                        }
                                        SortHeader {
                                            label: "Spent",
                                            column: "totalSpent",
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
                                    for customer in page.items.iter() {
                                        {
                                            let customer_id = customer.id;
                                            rsx! {
                                                tr {
                                                    onclick: move |_| {
                                                        navigator().push(Route::customer_detail(customer_id));
                                                    },
                                                    td { "{customer.full_name}" }
                                                    td { "{customer.email}" }
                                                    td {
                                                        if customer.phone.is_empty() {
                                                            span { class: "text-muted", "—" }
                                                        } else {
                                                            "{customer.phone}"
                                                        }
                                                    }
                                                    td { "{customer.orders_count}" }
                                                    td { {format_money(customer.total_spent, &customer.currency)} }
                                                    td { {format_date(customer.updated_at)} }
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
