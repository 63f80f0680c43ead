use dioxus::prelude::*;

use designhub_common::custom_order::CustomOrder;
use designhub_common::date::format_order_date;
use designhub_common::history::{HistoryCard, HistorySearch};
use designhub_common::order::Order;

use super::session::use_backend;

/// Order lookup by email across both order collections.
#[component]
pub fn OrderHistory() -> Element {
    let client = use_backend();
    let mut search = use_signal(HistorySearch::default);

    let on_search = move |evt: FormEvent| {
        evt.prevent_default();
        let email = match search.write().begin() {
            Ok(email) => email,
            Err(e) => {
                tracing::debug!("History search not started: {e}");
                return;
            }
        };

        let client = client.clone();
        spawn(async move {
            let outcome = client.order_history(&email).await;
            // Either read failing leaves the previous results on screen.
            if let Err(e) = search.write().finish(outcome) {
                tracing::error!("Error fetching orders: {e}");
            }
        });
    };

    let state = search.read();
    let email = state.email.clone();
    let loading = state.loading;
    let searched = state.searched;
    let empty = state.shows_empty_state();
    let results = state.results.clone();
    drop(state);
    let sections = results.sections();

    rsx! {
        div { class: "order-history",
            div { class: "history-search",
                h2 { "Track Your Orders" }
                form { class: "search-form", onsubmit: on_search,
                    input {
                        r#type: "email",
                        required: true,
                        placeholder: "Enter your email address",
                        value: email,
                        oninput: move |evt| search.write().email = evt.value(),
                    }
                    button {
                        r#type: "submit",
                        class: "search-button",
                        disabled: loading,
                        if loading { "Searching..." } else { "Search" }
                    }
                }
            }

            if searched {
                if empty {
                    div { class: "empty-state",
                        p { "No orders found for this email address." }
                    }
                } else {
                    for section in sections {
                        div { class: "history-section",
                            h3 { {section.heading()} }
                            div { class: "order-list",
                                for card in section.cards {
                                    {match card {
                                        HistoryCard::Standard(order) => rsx! {
                                            StandardOrderCard { key: "{order.id.0}", order: order.clone() }
                                        },
                                        HistoryCard::Custom(order) => rsx! {
                                            CustomOrderCard { key: "{order.id.0}", order: order.clone() }
                                        },
                                    }}
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn local_date(at: &chrono::DateTime<chrono::Utc>) -> String {
    format_order_date(at, &chrono::Local)
}

#[component]
fn StandardOrderCard(order: Order) -> Element {
    let short_id = order.id.short().to_string();
    let status = order.status.as_str().to_string();
    let status_class = order.status.color().class();
    let unit_price = order.product_price.to_string();
    let total = order.total_amount.to_string();
    let notes = order.visible_notes().map(String::from);
    let placed_at = local_date(&order.created_at);

    rsx! {
        div { class: "order-card",
            div { class: "order-header",
                div {
                    h4 { "{order.product_name}" }
                    p { class: "order-id", "Order #{short_id}" }
                }
                span { class: "status-badge {status_class}", "{status}" }
            }
            div { class: "order-details",
                div {
                    p { class: "detail-label", "Customer" }
                    p { class: "detail-value", "{order.customer_name}" }
                }
                div {
                    p { class: "detail-label", "Quantity" }
                    p { class: "detail-value", "{order.quantity}" }
                }
                div {
                    p { class: "detail-label", "Price per item" }
                    p { class: "detail-value", "{unit_price}" }
                }
                div {
                    p { class: "detail-label", "Total Amount" }
                    p { class: "detail-value order-total-amount", "{total}" }
                }
            }
            if let Some(notes) = notes {
                div { class: "order-notes",
                    p { class: "detail-label", "Notes:" }
                    p { "{notes}" }
                }
            }
            div { class: "order-date", "{placed_at}" }
        }
    }
}

#[component]
fn CustomOrderCard(order: CustomOrder) -> Element {
    let short_id = order.id.short().to_string();
    let status = order.status.spaced_label();
    let status_class = order.status.color().class();
    let estimate = order.visible_estimate().map(|p| p.to_string());
    let placed_at = local_date(&order.created_at);

    rsx! {
        div { class: "order-card",
            div { class: "order-header",
                div {
                    h4 { "Custom Order Request" }
                    p { class: "order-id", "Order #{short_id}" }
                }
                span { class: "status-badge {status_class}", "{status}" }
            }
            div { class: "order-description",
                p { class: "detail-label", "Description:" }
                p { "{order.description}" }
            }
            if let Some(estimate) = estimate {
                div { class: "order-estimate",
                    p { class: "detail-label", "Estimated Price:" }
                    p { class: "detail-value order-total-amount", "{estimate}" }
                }
            }
            div { class: "order-date", "{placed_at}" }
        }
    }
}
