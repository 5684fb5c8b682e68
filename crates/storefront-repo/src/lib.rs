use storefront_types::domain::product::Product;

pub mod memory;

pub use memory::InMemoryCatalog;

/// Builds the catalog the storefront opens with.
pub fn build_catalog() -> anyhow::Result<InMemoryCatalog> {
    let products = vec![
        Product::new(
            1,
            "Gaming Laptop",
            1299.99,
            "High-performance gaming laptop with RTX 3080",
            10,
        )?,
        Product::new(2, "iPhone 15 Pro", 999.99, "Latest Apple smartphone", 20)?,
        Product::new(3, "iPad Pro", 799.99, "12.9-inch iPad Pro with M2 chip", 15)?,
    ];
    Ok(InMemoryCatalog::new(products)?)
}
