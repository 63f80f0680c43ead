use std::fmt;

pub const PRODUCTS: &str = "products";
pub const ORDERS: &str = "orders";
pub const CUSTOM_ORDERS: &str = "custom_orders";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Ascending => write!(f, "asc"),
            Direction::Descending => write!(f, "desc"),
        }
    }
}

/// A filtered, ordered read in PostgREST query-string form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    select: String,
    filters: Vec<(String, String)>,
    order: Option<(String, Direction)>,
}

impl Default for Query {
    fn default() -> Self {
        Self {
            select: "*".to_string(),
            filters: Vec::new(),
            order: None,
        }
    }
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(mut self, columns: &str) -> Self {
        self.select = columns.to_string();
        self
    }

    /// Exact-match filter on `column`.
    pub fn eq(mut self, column: &str, value: &str) -> Self {
        self.filters.push((column.to_string(), format!("eq.{value}")));
        self
    }

    pub fn order(mut self, column: &str, direction: Direction) -> Self {
        self.order = Some((column.to_string(), direction));
        self
    }

    /// Newest rows first.
    pub fn newest_first(self) -> Self {
        self.order("created_at", Direction::Descending)
    }

    /// Query parameters in request order. Encoding is left to the HTTP client.
    pub fn pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![("select".to_string(), self.select.clone())];
        pairs.extend(self.filters.iter().cloned());
        if let Some((column, direction)) = &self.order {
            pairs.push(("order".to_string(), format!("{column}.{direction}")));
        }
        pairs
    }
}
