use dioxus::prelude::*;
use types::{Customer, Order};
use ui::{PropertyList, PropertyListItem, ResourceError, StatusBadge};
use uuid::Uuid;

use crate::Route;
use crate::fetch::{FetchGate, FetchState};
use crate::views::{format_date, format_money, order_tone};

#[component]
pub fn CustomerDetail(customer_id: ReadSignal<Uuid>) -> Element {
    let mut state = use_signal(|| FetchState::<(Customer, Vec<Order>)>::Loading);
    let mut gate = use_signal(FetchGate::new);

    // Refetches when navigation changes the id; a stale resolution for the
    // previous customer is dropped at the gate.
    use_effect(move || {
        let id = customer_id();
        let ticket = gate.write().issue();
        state.set(FetchState::Loading);
        spawn(async move {
            let customer = api::get_customer(id).await;
            let orders = api::list_customer_orders(id).await;
            if !gate.peek().admits(ticket) {
                return;
            }
            match (customer, orders) {
                (Ok(customer), Ok(orders)) => state.set(FetchState::Loaded((customer, orders))),
                (Err(e), _) | (_, Err(e)) => state.set(FetchState::Error(e.to_string())),
            }
        });
    });

    rsx! {
        div {
            div { class: "page-header",
                Link { to: Route::customers(), class: "btn btn-link", "← Customers" }
            }
            match &*state.read() {
                FetchState::Loading => rsx! {
                    div { class: "loading", "Loading customer..." }
                },
                FetchState::Error(message) => rsx! {
                    ResourceError { message: Some(message.clone()) }
                },
                FetchState::Loaded((customer, orders)) => rsx! {
                    div { class: "page-header",
                        h1 { class: "page-title", "{customer.full_name}" }
                        p { class: "page-subtitle", "{customer.email}" }
                    }
                    div { class: "grid grid-cols-2",
                        div { class: "card",
                            div { class: "card-header",
                                h2 { class: "card-title", "Details" }
                            }
                            div { class: "card-body",
                                PropertyList {
                                    PropertyListItem { label: "Name", value: customer.full_name.clone() }
                                    PropertyListItem { label: "Email", value: customer.email.clone() }
                                    PropertyListItem {
                                        label: "Phone",
                                        value: if customer.phone.is_empty() { "—".to_string() } else { customer.phone.clone() },
                                    }
                                    PropertyListItem {
                                        label: "Returning",
                                        value: if customer.is_returning { "Yes".to_string() } else { "No".to_string() },
                                    }
                                    PropertyListItem {
                                        label: "Orders placed",
                                        value: customer.orders_count.to_string(),
                                    }
                                    PropertyListItem {
                                        label: "Lifetime spend",
                                        value: format_money(customer.total_spent, &customer.currency),
                                    }
                                    PropertyListItem {
                                        label: "Customer since",
                                        value: format_date(customer.created_at),
                                    }
                                }
                            }
                        }
                        div { class: "card",
                            div { class: "card-header",
                                h2 { class: "card-title", "Latest orders" }
                            }
                            if orders.is_empty() {
                                div { class: "card-body",
                                    p { class: "text-muted", "No orders yet." }
                                }
                            } else {
                                div { class: "table-container",
                                    table {
                                        thead {
                                            tr {
                                                th { "Number" }
                                                th { "Status" }
                                                th { "Total" }
                                                th { "Placed" }
                                            }
                                        }
                                        tbody {
                                            for order in orders.iter() {
                                                tr {
                                                    td { span { class: "mono", "{order.number}" } }
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
                    }
                },
            }
        }
    }
}
