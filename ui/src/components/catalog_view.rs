use dioxus::prelude::*;

use designhub_common::catalog::CatalogState;
use designhub_common::product::Product;

use super::session::use_backend;

/// Read the whole catalog once, when the calling component mounts.
pub fn use_catalog() -> Signal<CatalogState> {
    let client = use_backend();
    let mut catalog = use_signal(CatalogState::default);

    use_hook(move || {
        spawn(async move {
            let result = client.list_products().await;
            // A failed read shows as an empty catalog; the user is not told.
            if let Err(e) = catalog.write().finish(result) {
                tracing::error!("Error fetching products: {e}");
            }
        });
    });

    catalog
}

#[component]
pub fn CatalogView(catalog: Signal<CatalogState>, on_buy: EventHandler<Product>) -> Element {
    let state = catalog.read();
    if state.is_loading() {
        return rsx! {
            div { class: "loading-spinner-wrap",
                div { class: "loading-spinner" }
            }
        };
    }
    let products = state.products().to_vec();
    drop(state);

    rsx! {
        div { class: "product-grid",
            for product in products {
                ProductCard { key: "{product.id.0}", product, on_buy }
            }
        }
    }
}

#[component]
fn ProductCard(product: Product, on_buy: EventHandler<Product>) -> Element {
    let price = product.price.to_string();
    let stock = product.stock;
    let name = product.name.clone();
    let description = product.description.clone();
    let image_url = product.image_url.clone();

    rsx! {
        div { class: "product-card",
            div { class: "product-image",
                img { src: "{image_url}", alt: "{name}" }
            }
            div { class: "product-body",
                h3 { "{name}" }
                p { class: "product-description", "{description}" }
                div { class: "product-footer",
                    span { class: "price", "{price}" }
                    button {
                        class: "buy-button",
                        onclick: move |_| on_buy.call(product.clone()),
                        "Buy Now"
                    }
                }
                p { class: "quantity", "In stock: {stock}" }
            }
        }
    }
}
