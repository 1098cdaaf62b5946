mod auth_routes;
mod config;
mod query;
mod store;

use axum::Router;
use axum::http::HeaderMap;
use dioxus::fullstack::FullstackContext;
use types::{Result, SESSION_COOKIE_NAME, UserSession, decode_session, err};

pub use crate::config::CONFIG;
pub use crate::store::{
    get_customer, list_customer_orders, list_customers, list_orders, list_products,
};

pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

/// Build the server-side routes that live outside the server-function
/// surface: the auth redirects.
pub fn init() -> Router {
    auth_routes::auth_router()
}

/// Extract the user session from the request cookie.
pub async fn session_from_cookie() -> Result<UserSession> {
    let headers: HeaderMap = FullstackContext::extract().await?;

    let cookie_header = headers
        .get(axum::http::header::COOKIE)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| err!("no cookies in request"))?;

    for cookie_str in cookie_header.split(';') {
        let cookie_str = cookie_str.trim();
        if let Some(value) = cookie_str.strip_prefix(&format!("{}=", SESSION_COOKIE_NAME)) {
            return decode_session(value);
        }
    }

    Err(err!("session cookie not found"))
}

/// Require an authenticated session. Server functions backing the resource
/// API call this before touching the store.
pub async fn require_session() -> Result<UserSession> {
    session_from_cookie().await.map_err(|_| err!("not signed in"))
}
