use crate::custom_order::CustomOrder;
use crate::form::{is_valid_email, FormError};
use crate::order::Order;

/// Both result sets of an order-history lookup, each newest first as returned
/// by the backend.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoryResults {
    pub orders: Vec<Order>,
    pub custom_orders: Vec<CustomOrder>,
}

/// One rendered card in the history view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HistoryCard<'a> {
    Standard(&'a Order),
    Custom(&'a CustomOrder),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Product,
    Custom,
}

/// A titled list of cards. Sections with no cards are never produced.
#[derive(Debug, Clone, PartialEq)]
pub struct HistorySection<'a> {
    pub kind: SectionKind,
    pub cards: Vec<HistoryCard<'a>>,
}

impl HistorySection<'_> {
    pub fn heading(&self) -> String {
        let title = match self.kind {
            SectionKind::Product => "Product Orders",
            SectionKind::Custom => "Custom Orders",
        };
        format!("{title} ({})", self.cards.len())
    }
}

impl HistoryResults {
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty() && self.custom_orders.is_empty()
    }

    /// Product orders first, then custom orders, each in backend order.
    pub fn sections(&self) -> Vec<HistorySection<'_>> {
        let product = HistorySection {
            kind: SectionKind::Product,
            cards: self.orders.iter().map(HistoryCard::Standard).collect(),
        };
        let custom = HistorySection {
            kind: SectionKind::Custom,
            cards: self.custom_orders.iter().map(HistoryCard::Custom).collect(),
        };
        [product, custom]
            .into_iter()
            .filter(|section| !section.cards.is_empty())
            .collect()
    }
}

/// State of the order-tracking view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistorySearch {
    pub email: String,
    pub loading: bool,
    pub searched: bool,
    pub results: HistoryResults,
}

impl HistorySearch {
    /// Start a search. Returns the email to query, or an error if the address
    /// would not pass the input's email check.
    pub fn begin(&mut self) -> Result<String, FormError> {
        let email = self.email.trim();
        if !is_valid_email(email) {
            return Err(FormError::InvalidEmail);
        }
        self.loading = true;
        self.searched = true;
        Ok(email.to_string())
    }

    /// Record the outcome of a search. On failure the previous results are
    /// kept and the error is handed back for logging.
    pub fn finish<E>(&mut self, outcome: Result<HistoryResults, E>) -> Result<(), E> {
        self.loading = false;
        self.results = outcome?;
        Ok(())
    }

    /// The "no orders found" message shows only after a completed search with
    /// nothing in either collection.
    pub fn shows_empty_state(&self) -> bool {
        self.searched && !self.loading && self.results.is_empty()
    }
}
