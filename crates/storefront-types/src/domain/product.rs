use std::fmt;

use serde::Serialize;

use crate::domain::error::ValidationError;

/// A catalog entry. Immutable once built; stock is never decremented.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    product_id: i64,
    name: String,
    price: f64,
    description: String,
    stock_quantity: i64,
}

impl Product {
    pub fn new(
        product_id: i64,
        name: impl Into<String>,
        price: f64,
        description: impl Into<String>,
        stock_quantity: i64,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if product_id <= 0 {
            return Err(ValidationError::MustBePositive { field: "product id" });
        }
        if name.trim().is_empty() {
            return Err(ValidationError::Required { field: "product name" });
        }
        if !price.is_finite() || price <= 0.0 {
            return Err(ValidationError::MustBePositive { field: "price" });
        }
        if stock_quantity < 0 {
            return Err(ValidationError::Negative { field: "stock quantity" });
        }
        Ok(Self {
            product_id,
            name,
            price,
            description: description.into(),
            stock_quantity,
        })
    }

    pub fn product_id(&self) -> i64 {
        self.product_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn stock_quantity(&self) -> i64 {
        self.stock_quantity
    }

    pub fn is_available(&self) -> bool {
        self.stock_quantity > 0
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Product[ID={}, Name='{}', Price=${:.2}, Stock={}, Description='{}']",
            self.product_id, self.name, self.price, self.stock_quantity, self.description
        )
    }
}
