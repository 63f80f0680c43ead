use crate::product::Product;

/// Catalog lifecycle: `Loading` until the one product read resolves.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum CatalogState {
    #[default]
    Loading,
    Loaded(Vec<Product>),
}

impl CatalogState {
    pub fn is_loading(&self) -> bool {
        matches!(self, CatalogState::Loading)
    }

    pub fn products(&self) -> &[Product] {
        match self {
            CatalogState::Loading => &[],
            CatalogState::Loaded(products) => products,
        }
    }

    /// Apply the read result. A failed read leaves an empty catalog and hands
    /// the error back to the caller, which only logs it.
    pub fn finish<E>(&mut self, outcome: Result<Vec<Product>, E>) -> Result<(), E> {
        match outcome {
            Ok(products) => {
                *self = CatalogState::Loaded(products);
                Ok(())
            }
            Err(e) => {
                *self = CatalogState::Loaded(Vec::new());
                Err(e)
            }
        }
    }
}
