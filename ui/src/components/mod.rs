pub mod app;
pub mod catalog_view;
pub mod checkout_modal;
pub mod custom_order_modal;
pub mod order_history;
pub mod session;
