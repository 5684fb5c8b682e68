use std::sync::Arc;

use crate::domain::product::Product;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate product id: {0}")]
    DuplicateProduct(i64),
}

/// Read-only view of the products offered for sale.
pub trait ProductCatalog {
    /// All products, in catalog order.
    fn products(&self) -> Vec<Arc<Product>>;
    fn find(&self, product_id: i64) -> Option<Arc<Product>>;
}
