use std::sync::Arc;

use storefront_types::domain::product::Product;
use storefront_types::ports::product_catalog::{CatalogError, ProductCatalog};

#[derive(Clone, Debug, Default)]
pub struct InMemoryCatalog {
    products: Vec<Arc<Product>>,
}

impl InMemoryCatalog {
    /// Keeps the given order; product ids must be unique.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut out: Vec<Arc<Product>> = Vec::with_capacity(products.len());
        for p in products {
            if out.iter().any(|e| e.product_id() == p.product_id()) {
                return Err(CatalogError::DuplicateProduct(p.product_id()));
            }
            out.push(Arc::new(p));
        }
        Ok(Self { products: out })
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl ProductCatalog for InMemoryCatalog {
    fn products(&self) -> Vec<Arc<Product>> {
        self.products.clone()
    }

    fn find(&self, product_id: i64) -> Option<Arc<Product>> {
        self.products
            .iter()
            .find(|p| p.product_id() == product_id)
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_returns_the_shared_instance() {
        let catalog =
            InMemoryCatalog::new(vec![Product::new(4, "Mouse", 19.5, "", 3).unwrap()]).unwrap();
        let a = catalog.find(4).unwrap();
        let b = catalog.find(4).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert!(catalog.find(5).is_none());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = InMemoryCatalog::new(vec![
            Product::new(1, "A", 1.0, "", 1).unwrap(),
            Product::new(1, "B", 2.0, "", 1).unwrap(),
        ])
        .unwrap_err();
        assert_eq!(err, CatalogError::DuplicateProduct(1));
    }
}
