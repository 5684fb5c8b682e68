pub mod customer;
pub mod error;
pub mod money;
pub mod order;
pub mod product;
