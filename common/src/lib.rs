mod de;

pub mod catalog;
pub mod currency;
pub mod custom_order;
pub mod date;
pub mod form;
pub mod history;
pub mod order;
pub mod product;
pub mod session;
