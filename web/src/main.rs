use dioxus::prelude::*;
use uuid::Uuid;

mod fetch;
mod views;

use types::UserSession;
use views::{CustomerDetail, Customers, Dashboard, Login, NotFound, Orders, Products};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/login")]
    Login {},
    #[layout(AuthenticatedLayout)]
        #[route("/")]
        Dashboard {},
        #[route("/customers")]
        CustomerList {},
        #[route("/customers/:customer_id")]
        CustomerDetail { customer_id: Uuid },
        #[route("/products")]
        ProductList {},
        #[route("/orders")]
        OrderList {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    pub fn customers() -> Self {
        Route::CustomerList {}
    }

    pub fn customer_detail(customer_id: Uuid) -> Self {
        Route::CustomerDetail { customer_id }
    }

    pub fn products() -> Self {
        Route::ProductList {}
    }

    pub fn orders() -> Self {
        Route::OrderList {}
    }
}

#[component]
fn CustomerList() -> Element {
    rsx! { Customers {} }
}

#[component]
fn ProductList() -> Element {
    rsx! { Products {} }
}

#[component]
fn OrderList() -> Element {
    rsx! { Orders {} }
}

fn main() {
    #[cfg(feature = "server")]
    {
        server::init_tracing();
        dioxus::serve(|| async move {
            let routes = server::init();

            Ok(dioxus::server::router(App).merge(routes))
        });
    }

    #[cfg(all(feature = "web", not(feature = "server")))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "Atelier" }
        document::Link { rel: "icon", href: asset!("/assets/favicon.svg") }
        document::Link { rel: "stylesheet", href: asset!("/assets/main.css") }

        Router::<Route> {}
    }
}

#[component]
fn NavLink(to: Route, children: Element) -> Element {
    let current_route: Route = use_route();
    let is_active = matches!(
        (&current_route, &to),
        (Route::Dashboard {}, Route::Dashboard {})
            | (Route::CustomerList {}, Route::CustomerList {})
            | (Route::CustomerDetail { .. }, Route::CustomerList {})
            | (Route::ProductList {}, Route::ProductList {})
            | (Route::OrderList {}, Route::OrderList {})
    );

    rsx! {
        Link {
            to,
            class: if is_active { "active" },
            {children}
        }
    }
}

/// The signed-in operator, injected once at the authenticated layout.
/// Screens receive it as a typed value; there is no global mutable auth
/// state to reach for.
#[derive(Clone)]
pub struct SessionContext(pub UserSession);

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
}

#[component]
fn AuthenticatedLayout() -> Element {
    let user = use_server_future(api::get_current_user)?;

    match &*user.read() {
        Some(Ok(Some(session))) => {
            let session = session.clone();
            use_context_provider(|| SessionContext(session.clone()));
            let initial = session
                .display_name
                .chars()
                .next()
                .unwrap_or('?')
                .to_uppercase()
                .to_string();

            rsx! {
                div { class: "app-layout",
                    // Sidebar
                    aside { class: "sidebar",
                        div { class: "sidebar-header",
                            span { class: "sidebar-logo", "Atelier" }
                        }
                        nav { class: "sidebar-nav",
                            NavLink { to: Route::Dashboard {}, "Dashboard" }
                            NavLink { to: Route::customers(), "Customers" }
                            NavLink { to: Route::products(), "Products" }
                            NavLink { to: Route::orders(), "Orders" }
                        }
                        div { class: "sidebar-footer",
                            div { class: "sidebar-user",
                                div { class: "sidebar-avatar", "{initial}" }
                                div { class: "sidebar-user-info",
                                    div { class: "sidebar-user-name", "{session.display_name}" }
                                    div { class: "sidebar-user-role", "{session.username}" }
                                }
                            }
                            a { href: "/auth/logout", rel: "external", class: "sidebar-logout", "Sign out" }
                        }
                    }
                    // Main content
                    main { class: "main-content",
                        Outlet::<Route> {}
                    }
                }
            }
        }
        Some(Ok(None)) | Some(Err(_)) => {
            let nav = navigator();
            nav.push(Route::Login {});
            rsx! {
                div { class: "loading", "Redirecting to login..." }
            }
        }
        None => {
            rsx! {
                div { class: "loading", "Loading..." }
            }
        }
    }
}
