use std::fmt;
use std::sync::Arc;

use crate::domain::error::{ShopError, ValidationError};
use crate::domain::product::Product;

/// Maximum number of entries a cart may hold.
pub const MAX_CART_ITEMS: usize = 10;

/// The shopper of a session. The cart is only reachable through the methods below.
#[derive(Debug, Clone)]
pub struct Customer {
    customer_id: i64,
    name: String,
    cart: Vec<Arc<Product>>,
}

impl Customer {
    pub fn new(customer_id: i64, name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if customer_id <= 0 {
            return Err(ValidationError::MustBePositive { field: "customer id" });
        }
        if name.trim().is_empty() {
            return Err(ValidationError::Required { field: "customer name" });
        }
        Ok(Self {
            customer_id,
            name,
            cart: Vec::with_capacity(MAX_CART_ITEMS),
        })
    }

    pub fn customer_id(&self) -> i64 {
        self.customer_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Appends `product` to the cart. Duplicates are allowed.
    pub fn add_to_cart(&mut self, product: Arc<Product>) -> Result<(), ShopError> {
        if !product.is_available() {
            return Err(ShopError::OutOfStock(product.name().to_string()));
        }
        if self.cart.len() >= MAX_CART_ITEMS {
            return Err(ShopError::CartFull {
                max: MAX_CART_ITEMS,
            });
        }
        self.cart.push(product);
        Ok(())
    }

    /// Removes the first cart entry that is the same instance as `product`.
    pub fn remove_from_cart(&mut self, product: &Arc<Product>) -> Result<(), ShopError> {
        let pos = self
            .cart
            .iter()
            .position(|p| Arc::ptr_eq(p, product))
            .ok_or_else(|| ShopError::NotInCart(product.name().to_string()))?;
        self.cart.remove(pos);
        Ok(())
    }

    pub fn calculate_cart_total(&self) -> f64 {
        self.cart.iter().map(|p| p.price()).sum()
    }

    /// Copy of the cart; changes to it never reach the customer.
    pub fn shopping_cart(&self) -> Vec<Arc<Product>> {
        self.cart.clone()
    }

    pub fn clear_cart(&mut self) {
        self.cart.clear();
    }

    pub fn cart_size(&self) -> usize {
        self.cart.len()
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Customer[ID={}, Name='{}', Cart Items={}]",
            self.customer_id,
            self.name,
            self.cart.len()
        )
    }
}
