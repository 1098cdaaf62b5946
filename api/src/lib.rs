use dioxus::prelude::*;
use types::{Controller, Customer, Order, Page, Product, UserSession};
use uuid::Uuid;

#[post("/api/current-user")]
pub async fn get_current_user() -> ServerFnResult<Option<UserSession>> {
    match server::session_from_cookie().await {
        Ok(session) => Ok(Some(session)),
        Err(_) => Ok(None),
    }
}

#[post("/api/customers")]
pub async fn list_customers(controller: Controller) -> ServerFnResult<Page<Customer>> {
    server::require_session().await?;
    Ok(server::list_customers(&controller))
}

#[post("/api/customers/detail")]
pub async fn get_customer(customer_id: Uuid) -> ServerFnResult<Customer> {
    server::require_session().await?;
    Ok(server::get_customer(customer_id)?)
}

#[post("/api/customers/orders")]
pub async fn list_customer_orders(customer_id: Uuid) -> ServerFnResult<Vec<Order>> {
    server::require_session().await?;
    Ok(server::list_customer_orders(customer_id))
}

#[post("/api/products")]
pub async fn list_products(controller: Controller) -> ServerFnResult<Page<Product>> {
    server::require_session().await?;
    Ok(server::list_products(&controller))
}

#[post("/api/orders")]
pub async fn list_orders(controller: Controller) -> ServerFnResult<Page<Order>> {
    server::require_session().await?;
    Ok(server::list_orders(&controller))
}
