use axum::{
    Router,
    http::HeaderMap,
    response::{IntoResponse, Redirect},
    routing::get,
};
use cookie::{Cookie, SameSite};
use types::{SESSION_COOKIE_NAME, UserSession, encode_session};
use uuid::Uuid;

use crate::CONFIG;

pub fn auth_router() -> Router {
    Router::new()
        .route("/auth/login", get(login))
        .route("/auth/logout", get(logout))
}

/// Sign-in is delegated to the identity provider. The demo provider
/// resolves the configured operator identity in-process and hands back an
/// opaque access token; swapping in a real provider only changes this
/// handler.
async fn login() -> impl IntoResponse {
    tracing::info!("login route hit, resolving operator session");

    let session = UserSession {
        user_id: format!("demo|{}", CONFIG.operator_username),
        username: CONFIG.operator_username.clone(),
        display_name: CONFIG.operator_display_name.clone(),
        access_token: Uuid::new_v4().simple().to_string().into(),
    };

    let Ok(value) = encode_session(&session) else {
        tracing::error!("failed to encode session cookie");
        return Redirect::to("/login").into_response();
    };

    let cookie = Cookie::build((SESSION_COOKIE_NAME, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build();

    let mut response = Redirect::to("/").into_response();
    response.headers_mut().insert(
        axum::http::header::SET_COOKIE,
        cookie.to_string().parse().unwrap(),
    );

    response
}

async fn logout(headers: HeaderMap) -> impl IntoResponse {
    if let Some(cookie_header) = headers.get(axum::http::header::COOKIE)
        && let Ok(cookie_str) = cookie_header.to_str()
        && cookie_str.contains(SESSION_COOKIE_NAME)
    {
        tracing::info!("clearing operator session");
    }

    // Expire the session cookie
    let cookie = Cookie::build((SESSION_COOKIE_NAME, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(cookie::time::Duration::ZERO)
        .build();

    let mut response = Redirect::to("/login").into_response();
    response.headers_mut().insert(
        axum::http::header::SET_COOKIE,
        cookie.to_string().parse().unwrap(),
    );

    response
}
