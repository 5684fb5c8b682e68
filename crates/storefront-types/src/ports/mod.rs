pub mod product_catalog;
