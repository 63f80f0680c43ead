use dioxus::prelude::*;

use designhub_common::form::CustomOrderForm;

use super::session::use_backend;

const REQUEST_FAILED: &str = "Failed to submit request. Please try again.";

/// Free-text request for work outside the catalog. No price is computed.
#[component]
pub fn CustomOrderModal(on_close: EventHandler<()>, on_success: EventHandler<()>) -> Element {
    let client = use_backend();
    let mut form = use_signal(CustomOrderForm::default);
    let mut loading = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        error.set(None);
        let request = match form.read().validate() {
            Ok(request) => request,
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            }
        };

        loading.set(true);
        let client = client.clone();
        spawn(async move {
            let outcome = client.insert_custom_order(&request).await;
            loading.set(false);
            match outcome {
                Ok(()) => {
                    on_success.call(());
                    on_close.call(());
                }
                Err(e) => {
                    tracing::error!("Failed to submit custom order: {e}");
                    error.set(Some(REQUEST_FAILED.to_string()));
                }
            }
        });
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
                h2 { "Request a Custom Order" }
                p { class: "modal-intro",
                    "Tell us what you need and we'll get back to you with a quote."
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
                        label { "Project Description *" }
                        textarea {
                            required: true,
                            rows: "5",
                            placeholder: "Describe your project, goals and any deadlines...",
                            value: values.description,
                            oninput: move |evt| form.write().description = evt.value(),
                        }
                    }
                    if let Some(msg) = error.read().as_ref() {
                        div { class: "form-error", "{msg}" }
                    }
                    button {
                        r#type: "submit",
                        class: "submit-button",
                        disabled: is_loading,
                        if is_loading { "Submitting..." } else { "Submit Request" }
                    }
                }
            }
        }
    }
}
