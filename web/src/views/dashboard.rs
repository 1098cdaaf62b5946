use dioxus::prelude::*;
use types::Controller;
use ui::{ResourceError, StatusBadge};

use crate::views::{format_date, format_money, order_tone};
use crate::{Route, use_session};

#[component]
pub fn Dashboard() -> Element {
    let session = use_session();
    let latest = use_server_future(|| api::list_orders(Controller::default()))?;

    rsx! {
        div {
            div { class: "page-header",
                h1 { class: "page-title", "Dashboard" }
                p { class: "page-subtitle",
                    "Welcome back, {session.0.display_name}."
                }
            }
            div { class: "dashboard-grid",
                Link {
                    to: Route::customers(),
                    class: "dashboard-card",
                    h3 { class: "dashboard-card-title", "Customers" }
                    p { class: "dashboard-card-desc",
                        "Search and filter the customer base, drill into order history."
                    }
                }
                Link {
                    to: Route::products(),
                    class: "dashboard-card",
                    h3 { class: "dashboard-card-title", "Products" }
                    p { class: "dashboard-card-desc",
                        "Browse the catalog by publication status, price, and stock."
                    }
                }
                Link {
                    to: Route::orders(),
                    class: "dashboard-card",
                    h3 { class: "dashboard-card-title", "Orders" }
                    p { class: "dashboard-card-desc",
                        "Track orders from placed to complete."
                    }
                }
            }
            div { class: "card",
                div { class: "card-header",
                    h2 { class: "card-title", "Latest orders" }
                }
                match &*latest.read() {
                    Some(Ok(page)) => rsx! {
                        div { class: "table-container",
                            table {
                                thead {
                                    tr {
                                        th { "Number" }
                                        th { "Customer" }
                                        th { "Status" }
                                        th { "Total" }
                                        th { "Updated" }
                                    }
                                }
                                tbody {
                                    for order in page.items.iter() {
                                        tr {
                                            td { span { class: "mono", "{order.number}" } }
                                            td { "{order.customer_name}" }
                                            td {
                                                StatusBadge {
                                                    label: order.status.label().to_string(),
                                                    tone: order_tone(order.status).to_string(),
                                                }
                                            }
                                            td { {format_money(order.total_amount, &order.currency)} }
                                            td { {format_date(order.updated_at)} }
                                        }
                                    }
                                }
                            }
                        }
                    },
                    Some(Err(_)) => rsx! {
                        ResourceError {}
                    },
                    None => rsx! {
                        div { class: "loading", "Loading orders..." }
                    },
                }
            }
        }
    }
}
