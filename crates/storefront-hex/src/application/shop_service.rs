use std::sync::Arc;

use crate::errors::AppError;
use storefront_types::domain::customer::Customer;
use storefront_types::domain::order::{Order, OrderStatus};
use storefront_types::domain::product::Product;
use storefront_types::ports::product_catalog::ProductCatalog;

/// The state of one shopping session: the catalog on offer, the customer and
/// the id the next order will get.
pub struct ShopService<C: ProductCatalog> {
    catalog: C,
    customer: Customer,
    next_order_id: i64,
}

#[derive(Debug, Clone)]
pub struct CartView {
    pub items: Vec<Arc<Product>>,
    pub total: f64,
}

impl CartView {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<C: ProductCatalog> ShopService<C> {
    pub fn new(catalog: C, customer: Customer) -> Self {
        Self {
            catalog,
            customer,
            next_order_id: 1,
        }
    }

    pub fn with_first_order_id(mut self, order_id: i64) -> Self {
        self.next_order_id = order_id;
        self
    }

    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    pub fn browse_products(&self) -> Vec<Arc<Product>> {
        self.catalog.products()
    }

    pub fn find_product(&self, product_id: i64) -> Result<Arc<Product>, AppError> {
        self.catalog
            .find(product_id)
            .ok_or_else(|| AppError::NotFound(format!("product {}", product_id)))
    }

    pub fn add_to_cart(&mut self, product_id: i64) -> Result<Arc<Product>, AppError> {
        let product = self.find_product(product_id)?;
        if let Err(e) = self.customer.add_to_cart(product.clone()) {
            tracing::warn!(product_id, error = %e, "add to cart rejected");
            return Err(e.into());
        }
        tracing::debug!(
            product_id,
            cart_size = self.customer.cart_size(),
            "added to cart"
        );
        Ok(product)
    }

    pub fn remove_from_cart(&mut self, product_id: i64) -> Result<Arc<Product>, AppError> {
        let product = self.find_product(product_id)?;
        if let Err(e) = self.customer.remove_from_cart(&product) {
            tracing::warn!(product_id, error = %e, "remove from cart rejected");
            return Err(e.into());
        }
        tracing::debug!(
            product_id,
            cart_size = self.customer.cart_size(),
            "removed from cart"
        );
        Ok(product)
    }

    pub fn view_cart(&self) -> CartView {
        CartView {
            items: self.customer.shopping_cart(),
            total: self.customer.calculate_cart_total(),
        }
    }

    pub fn clear_cart(&mut self) {
        self.customer.clear_cart();
        tracing::debug!("cart cleared");
    }

    /// Turns the cart into a confirmed order and empties the cart.
    pub fn place_order(&mut self) -> Result<Order, AppError> {
        if self.customer.cart_size() == 0 {
            return Err(AppError::EmptyCart);
        }
        let following_id = self
            .next_order_id
            .checked_add(1)
            .ok_or(AppError::OrderIdsExhausted {
                last: self.next_order_id,
            })?;
        let mut order = Order::new(
            self.next_order_id,
            &self.customer,
            self.customer.shopping_cart(),
        )?;
        // Orders are built as CANCELLED and confirmed in a separate step.
        order.update_status(OrderStatus::Confirmed);

        self.customer.clear_cart();
        self.next_order_id = following_id;
        tracing::info!(
            order_id = order.order_id(),
            customer_id = order.customer().customer_id,
            items = order.products().len(),
            total = order.total_amount(),
            "order placed"
        );
        Ok(order)
    }
}
