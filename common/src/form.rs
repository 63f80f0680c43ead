//! Client-side validation for the checkout and custom-order forms.
//!
//! Validation runs before any write is attempted; a form that fails here never
//! reaches the backend.

use std::fmt;

use crate::custom_order::NewCustomOrder;
use crate::order::{NewOrder, OrderStatus};
use crate::product::Product;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    MissingName,
    InvalidEmail,
    MissingDescription,
    OutOfStock,
    QuantityOutOfRange { min: u32, max: u32 },
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingName => write!(f, "Please enter your name"),
            Self::InvalidEmail => write!(f, "Please enter a valid email address"),
            Self::MissingDescription => write!(f, "Please describe what you need"),
            Self::OutOfStock => write!(f, "This item is out of stock"),
            Self::QuantityOutOfRange { min, max } => {
                write!(f, "Quantity must be between {min} and {max}")
            }
        }
    }
}

impl std::error::Error for FormError {}

/// Email check equivalent to the browser's `type="email"` pattern:
/// `local@label(.label)*`, labels alphanumeric with inner hyphens, at most 63 chars.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    let local_ok = local
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || ".!#$%&'*+/=?^_`{|}~-".contains(c));
    local_ok && domain.split('.').all(is_valid_label)
}

fn is_valid_label(label: &str) -> bool {
    let bytes = label.as_bytes();
    match (bytes.first(), bytes.last()) {
        (Some(first), Some(last)) => {
            bytes.len() <= 63
                && first.is_ascii_alphanumeric()
                && last.is_ascii_alphanumeric()
                && bytes.iter().all(|b| b.is_ascii_alphanumeric() || *b == b'-')
        }
        _ => false,
    }
}

/// Clamp raw quantity input into `[1, stock]`.
///
/// Only the leading integer is read, so `"2.5"` is 2 and `"7 units"` is 7.
/// Input with no leading digits becomes 1.
pub fn clamp_quantity(raw: &str, stock: u32) -> u32 {
    let max = stock.max(1);
    let raw = raw.trim_start();
    let (negative, rest) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw.strip_prefix('+').unwrap_or(raw)),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..end];
    if digits.is_empty() || negative {
        return 1;
    }
    // Too many digits for u64 is still "more than stock".
    let wanted = digits.parse::<u64>().unwrap_or(u64::MAX);
    wanted.clamp(1, u64::from(max)) as u32
}

/// Fields of the checkout modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutForm {
    pub name: String,
    pub email: String,
    pub quantity: u32,
    pub notes: String,
}

impl Default for CheckoutForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            quantity: 1,
            notes: String::new(),
        }
    }
}

impl CheckoutForm {
    /// Check the form against `product` and build the insert payload.
    pub fn validate(&self, product: &Product) -> Result<NewOrder, FormError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(FormError::MissingName);
        }
        let email = self.email.trim();
        if !is_valid_email(email) {
            return Err(FormError::InvalidEmail);
        }
        if !product.in_stock() {
            return Err(FormError::OutOfStock);
        }
        if self.quantity < 1 || self.quantity > product.stock {
            return Err(FormError::QuantityOutOfRange {
                min: 1,
                max: product.stock,
            });
        }
        Ok(NewOrder::for_product(
            product,
            name.to_string(),
            email.to_string(),
            self.quantity,
            self.notes.clone(),
        ))
    }
}

/// Fields of the custom-order modal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomOrderForm {
    pub name: String,
    pub email: String,
    pub description: String,
}

impl CustomOrderForm {
    pub fn validate(&self) -> Result<NewCustomOrder, FormError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(FormError::MissingName);
        }
        let email = self.email.trim();
        if !is_valid_email(email) {
            return Err(FormError::InvalidEmail);
        }
        let description = self.description.trim();
        if description.is_empty() {
            return Err(FormError::MissingDescription);
        }
        Ok(NewCustomOrder {
            customer_name: name.to_string(),
            customer_email: email.to_string(),
            description: description.to_string(),
            status: OrderStatus::Pending,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::Price;
    use crate::product::ProductId;
    use chrono::{TimeZone, Utc};

    fn product(price_dollars: u64, stock: u32) -> Product {
        Product {
            id: ProductId("prod-1".into()),
            name: "Logo Design".into(),
            description: String::new(),
            price: Price::from_dollars(price_dollars),
            image_url: String::new(),
            stock,
            created_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    fn filled(quantity: u32) -> CheckoutForm {
        CheckoutForm {
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            quantity,
            notes: "Blue tones please".into(),
        }
    }

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("jane@example.com"));
        assert!(is_valid_email("j.doe+tag@mail.example.co.uk"));
        assert!(is_valid_email("admin@localhost"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("jane"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("jane@"));
        assert!(!is_valid_email("jane@-example.com"));
        assert!(!is_valid_email("jane@example..com"));
        assert!(!is_valid_email("ja ne@example.com"));
    }

    #[test]
    fn test_clamp_quantity() {
        assert_eq!(clamp_quantity("3", 5), 3);
        assert_eq!(clamp_quantity("0", 5), 1);
        assert_eq!(clamp_quantity("-4", 5), 1);
        assert_eq!(clamp_quantity("9", 5), 5);
        assert_eq!(clamp_quantity("", 5), 1);
        assert_eq!(clamp_quantity("abc", 5), 1);
        assert_eq!(clamp_quantity("99999999999999", 5), 5);
        assert_eq!(clamp_quantity("2", 0), 1);
    }

    #[test]
    fn test_clamp_quantity_reads_leading_integer() {
        assert_eq!(clamp_quantity("2.5", 5), 2);
        assert_eq!(clamp_quantity("4.99", 5), 4);
        assert_eq!(clamp_quantity(" 3 ", 5), 3);
        assert_eq!(clamp_quantity("7 units", 10), 7);
        assert_eq!(clamp_quantity("+2", 5), 2);
        assert_eq!(clamp_quantity("0.9", 5), 1);
        assert_eq!(clamp_quantity("-2.5", 5), 1);
        assert_eq!(clamp_quantity("1e3", 5), 1);
        assert_eq!(clamp_quantity("99999999999999999999999", 5), 5);
    }

    #[test]
    fn test_checkout_example_payload() {
        let order = filled(3).validate(&product(150, 5)).unwrap();
        assert_eq!(order.quantity, 3);
        assert_eq!(order.product_price, Price::from_dollars(150));
        assert_eq!(order.total_amount.format_total(), "$450.00");
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.notes, "Blue tones please");
    }

    #[test]
    fn test_checkout_quantity_bounds() {
        let p = product(10, 5);
        assert!(filled(1).validate(&p).is_ok());
        assert!(filled(5).validate(&p).is_ok());
        assert_eq!(
            filled(0).validate(&p),
            Err(FormError::QuantityOutOfRange { min: 1, max: 5 })
        );
        assert_eq!(
            filled(6).validate(&p),
            Err(FormError::QuantityOutOfRange { min: 1, max: 5 })
        );
    }

    #[test]
    fn test_checkout_rejects_out_of_stock() {
        assert_eq!(filled(1).validate(&product(10, 0)), Err(FormError::OutOfStock));
    }

    #[test]
    fn test_checkout_required_fields() {
        let p = product(10, 5);
        let mut form = filled(1);
        form.name = "   ".into();
        assert_eq!(form.validate(&p), Err(FormError::MissingName));

        let mut form = filled(1);
        form.email = "not-an-email".into();
        assert_eq!(form.validate(&p), Err(FormError::InvalidEmail));
    }

    #[test]
    fn test_checkout_trims_contact_fields() {
        let mut form = filled(2);
        form.name = "  Jane Doe ".into();
        form.email = " jane@example.com ".into();
        let order = form.validate(&product(10, 5)).unwrap();
        assert_eq!(order.customer_name, "Jane Doe");
        assert_eq!(order.customer_email, "jane@example.com");
    }

    #[test]
    fn test_custom_order_form() {
        let form = CustomOrderForm {
            name: "Sam".into(),
            email: "sam@example.com".into(),
            description: "A mascot for our bakery".into(),
        };
        let payload = form.validate().unwrap();
        assert_eq!(payload.status, OrderStatus::Pending);
        assert_eq!(payload.description, "A mascot for our bakery");

        let empty = CustomOrderForm {
            description: " ".into(),
            ..form
        };
        assert_eq!(empty.validate(), Err(FormError::MissingDescription));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            FormError::QuantityOutOfRange { min: 1, max: 5 }.to_string(),
            "Quantity must be between 1 and 5"
        );
    }
}
