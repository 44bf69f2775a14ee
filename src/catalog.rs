use crate::models::ProductState;
use std::collections::HashMap;

/// The product catalog collaborator.
///
/// The renderer only ever asks one question of the outside world: "give me
/// the current state of product N". Everything else (pricing rules, stock
/// bookkeeping, URL construction) happens behind this trait, before the
/// render call.
pub trait ProductCatalog {
    /// Look up a product by id. `None` means the product does not exist
    /// (or is not visible to the storefront); the renderer then substitutes
    /// the not-found notice instead of patching the fragment.
    fn lookup_product(&self, id: u64) -> Option<ProductState>;
}

/// A map-backed [`ProductCatalog`], handy for hosts that resolve product
/// state up front and for tests.
///
/// # Examples
///
/// ```rust
/// use cartable_rs::{ProductCatalog, ProductState, StaticCatalog};
///
/// let catalog: StaticCatalog = [ProductState {
///     id: 42,
///     ..ProductState::default()
/// }]
/// .into_iter()
/// .collect();
///
/// assert!(catalog.lookup_product(42).is_some());
/// assert!(catalog.lookup_product(7).is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    products: HashMap<u64, ProductState>,
}

impl StaticCatalog {
    pub fn new() -> StaticCatalog {
        StaticCatalog::default()
    }

    /// Add or replace a product, keyed by its id.
    pub fn insert(&mut self, product: ProductState) {
        self.products.insert(product.id, product);
    }
}

impl FromIterator<ProductState> for StaticCatalog {
    fn from_iter<I: IntoIterator<Item = ProductState>>(iter: I) -> StaticCatalog {
        let mut catalog = StaticCatalog::new();
        for product in iter {
            catalog.insert(product);
        }
        catalog
    }
}

impl ProductCatalog for StaticCatalog {
    fn lookup_product(&self, id: u64) -> Option<ProductState> {
        self.products.get(&id).cloned()
    }
}
