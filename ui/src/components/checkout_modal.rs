use dioxus::prelude::*;

use designhub_common::form::{clamp_quantity, CheckoutForm};
use designhub_common::product::Product;

use super::session::use_backend;

const ORDER_FAILED: &str = "Failed to place order. Please try again.";

#[component]
pub fn CheckoutModal(
    product: Product,
    on_close: EventHandler<()>,
    on_success: EventHandler<()>,
) -> Element {
    let client = use_backend();
    let mut form = use_signal(CheckoutForm::default);
    let mut loading = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    let stock = product.stock;
    let unit_price = product.price.to_string();
    let total = product.price.times(form.read().quantity).format_total();

    let submit = {
        let product = product.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            error.set(None);
            let order = match form.read().validate(&product) {
                Ok(order) => order,
                Err(e) => {
                    error.set(Some(e.to_string()));
                    return;
                }
            };

            loading.set(true);
            let client = client.clone();
            spawn(async move {
                let outcome = client.insert_order(&order).await;
                loading.set(false);
                match outcome {
                    Ok(()) => {
                        on_success.call(());
                        on_close.call(());
                    }
                    Err(e) => {
                        // Form stays open and filled so the user can retry.
                        tracing::error!("Failed to place order: {e}");
                        error.set(Some(ORDER_FAILED.to_string()));
                    }
                }
            });
        }
    };

    let values = form.read().clone();
    let is_loading = *loading.read();

    rsx! {
        div { class: "modal-backdrop",
            div { class: "modal",
                button {
                    class: "modal-close",
                    onclick: move |_| on_close.call(()),
                    "×"
                }
                h2 { "Complete Your Order" }
                div { class: "modal-product",
                    p { class: "modal-product-name", "{product.name}" }
                    p { class: "modal-product-price", "{unit_price} each" }
                }
                form { class: "order-form", onsubmit: submit,
                    div { class: "form-group",
                        label { "Full Name *" }
                        input {
                            r#type: "text",
                            required: true,
                            placeholder: "John Doe",
                            value: values.name,
                            oninput: move |evt| form.write().name = evt.value(),
                        }
                    }
                    div { class: "form-group",
                        label { "Email Address *" }
                        input {
                            r#type: "email",
                            required: true,
                            placeholder: "john@example.com",
                            value: values.email,
                            oninput: move |evt| form.write().email = evt.value(),
                        }
                    }
                    div { class: "form-group",
                        label { "Quantity *" }
                        input {
                            r#type: "number",
                            required: true,
                            min: "1",
                            max: "{stock}",
                            value: "{values.quantity}",
                            oninput: move |evt| form.write().quantity = clamp_quantity(&evt.value(), stock),
                        }
                    }
                    div { class: "form-group",
                        label { "Additional Notes (Optional)" }
                        textarea {
                            rows: "3",
                            placeholder: "Any special requirements or questions...",
                            value: values.notes,
                            oninput: move |evt| form.write().notes = evt.value(),
                        }
                    }
                    div { class: "order-summary",
                        div { class: "order-total",
                            span { "Total Amount:" }
                            span { class: "order-total-amount", "{total}" }
                        }
                        if let Some(msg) = error.read().as_ref() {
                            div { class: "form-error", "{msg}" }
                        }
                        button {
                            r#type: "submit",
                            class: "submit-button",
                            disabled: is_loading,
                            if is_loading { "Processing..." } else { "Place Order" }
                        }
                    }
                }
            }
        }
    }
}
