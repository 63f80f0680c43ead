use dioxus::prelude::*;

use designhub_client::{BackendClient, BackendConfig};
use designhub_common::session::{Page, SessionState};

use super::catalog_view::{use_catalog, CatalogView};
use super::checkout_modal::CheckoutModal;
use super::custom_order_modal::CustomOrderModal;
use super::order_history::OrderHistory;
use super::session::{announce_order_placed, use_session};

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Why the storefront could not start. Provided instead of a `BackendConfig`.
#[derive(Clone, Debug)]
pub struct ConfigProblem(pub String);

#[component]
pub fn App() -> Element {
    let config = use_context::<BackendConfig>();
    use_context_provider(|| BackendClient::new(&config));
    use_context_provider(|| Signal::new(SessionState::new()));

    rsx! {
        document::Stylesheet { href: MAIN_CSS }
        AppLayout {}
    }
}

#[component]
fn AppLayout() -> Element {
    let mut session = use_session();
    let catalog = use_catalog();

    let state = session.read();
    let page = state.page;
    let banner = state.banner_visible();
    let checkout_product = state.checkout_product().cloned();
    let show_custom_order = state.show_custom_order;
    drop(state);

    rsx! {
        div { class: "designhub-app",
            nav { class: "app-nav",
                div { class: "nav-inner",
                    h1 { class: "brand", "DesignHub" }
                    div { class: "nav-buttons",
                        button {
                            class: nav_class(page == Page::Products),
                            onclick: move |_| session.write().navigate(Page::Products),
                            "Products"
                        }
                        button {
                            class: nav_class(page == Page::Orders),
                            onclick: move |_| session.write().navigate(Page::Orders),
                            "Track Orders"
                        }
                        button {
                            class: "nav-button nav-custom",
                            onclick: move |_| session.write().open_custom_order(),
                            "Custom Order"
                        }
                    }
                }
            }

            if banner {
                div { class: "success-banner", "Order placed successfully!" }
            }

            main { class: "app-main",
                {match page {
                    Page::Products => rsx! {
                        div { class: "catalog-heading",
                            h2 { "Our Services" }
                            p { "Professional design and development services for your business needs" }
                        }
                        CatalogView {
                            catalog,
                            on_buy: move |product| session.write().open_checkout(product),
                        }
                    },
                    Page::Orders => rsx! { OrderHistory {} },
                }}
            }

            if let Some(product) = checkout_product {
                CheckoutModal {
                    product,
                    on_close: move |_| session.write().close_checkout(),
                    on_success: move |_| announce_order_placed(session),
                }
            }

            if show_custom_order {
                CustomOrderModal {
                    on_close: move |_| session.write().close_custom_order(),
                    on_success: move |_| announce_order_placed(session),
                }
            }
        }
    }
}

fn nav_class(active: bool) -> &'static str {
    if active {
        "nav-button nav-active"
    } else {
        "nav-button"
    }
}

/// Shown instead of the storefront when the backend credentials are missing.
#[component]
pub fn ConfigFailure() -> Element {
    let ConfigProblem(detail) = use_context::<ConfigProblem>();
    let logged = detail.clone();
    use_hook(move || tracing::error!("Storefront is not configured: {logged}"));

    rsx! {
        document::Stylesheet { href: MAIN_CSS }
        div { class: "designhub-app config-failure",
            h1 { "DesignHub is not configured" }
            p { "{detail}" }
        }
    }
}
