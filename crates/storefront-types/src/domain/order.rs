use std::fmt;
use std::fmt::Write as _;
use std::str::FromStr;
use std::sync::Arc;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::domain::customer::Customer;
use crate::domain::error::{ShopError, ValidationError};
use crate::domain::money::format_amount;
use crate::domain::product::Product;

const SUMMARY_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const RULE_HEAVY: &str = "=================================";
const RULE_LIGHT: &str = "---------------------------------";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Shipped,
    Cancelled,
    Completed,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Confirmed,
        OrderStatus::Shipped,
        OrderStatus::Cancelled,
        OrderStatus::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Confirmed => "CONFIRMED",
            OrderStatus::Shipped => "SHIPPED",
            OrderStatus::Cancelled => "CANCELLED",
            OrderStatus::Completed => "COMPLETED",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive match against the status names.
impl FromStr for OrderStatus {
    type Err = ShopError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ShopError::InvalidStatus(s.to_string()))
    }
}

/// Who placed an order, frozen at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerSnapshot {
    pub customer_id: i64,
    pub name: String,
}

impl From<&Customer> for CustomerSnapshot {
    fn from(c: &Customer) -> Self {
        Self {
            customer_id: c.customer_id(),
            name: c.name().to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Order {
    order_id: i64,
    customer: CustomerSnapshot,
    products: Vec<Arc<Product>>,
    total_amount: f64,
    order_date: DateTime<Local>,
    status: OrderStatus,
}

impl Order {
    pub fn new(
        order_id: i64,
        customer: &Customer,
        products: Vec<Arc<Product>>,
    ) -> Result<Self, ValidationError> {
        Self::new_at(order_id, customer, products, Local::now())
    }

    /// Like [`Order::new`] with an explicit order date.
    ///
    /// The status starts out as `CANCELLED`; callers confirm the order with
    /// [`Order::update_status`] once it is built.
    pub fn new_at(
        order_id: i64,
        customer: &Customer,
        products: Vec<Arc<Product>>,
        order_date: DateTime<Local>,
    ) -> Result<Self, ValidationError> {
        if order_id <= 0 {
            return Err(ValidationError::MustBePositive { field: "order id" });
        }
        if products.is_empty() {
            return Err(ValidationError::EmptyOrder);
        }
        let total_amount = products.iter().map(|p| p.price()).sum();
        Ok(Self {
            order_id,
            customer: customer.into(),
            products,
            total_amount,
            order_date,
            status: OrderStatus::Cancelled,
        })
    }

    pub fn order_id(&self) -> i64 {
        self.order_id
    }

    pub fn customer(&self) -> &CustomerSnapshot {
        &self.customer
    }

    pub fn products(&self) -> &[Arc<Product>] {
        &self.products
    }

    pub fn total_amount(&self) -> f64 {
        self.total_amount
    }

    pub fn order_date(&self) -> DateTime<Local> {
        self.order_date
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    /// Any status may follow any other.
    pub fn update_status(&mut self, status: OrderStatus) {
        self.status = status;
    }

    /// Parses `name` case-insensitively and stores the normalized status.
    /// On failure the current status is kept.
    pub fn update_status_str(&mut self, name: &str) -> Result<(), ShopError> {
        self.status = name.parse()?;
        Ok(())
    }

    pub fn generate_order_summary(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_summary(&mut out);
        out
    }

    fn write_summary(&self, out: &mut String) -> fmt::Result {
        writeln!(out)?;
        writeln!(out, "{RULE_HEAVY}")?;
        writeln!(out, "           ORDER SUMMARY          ")?;
        writeln!(out, "{RULE_HEAVY}")?;
        writeln!(out, "Order ID: {}", self.order_id)?;
        writeln!(
            out,
            "Customer: {} (ID: {})",
            self.customer.name, self.customer.customer_id
        )?;
        writeln!(out, "{RULE_LIGHT}")?;
        writeln!(out, "Products:")?;
        for p in &self.products {
            writeln!(out, "  - {:<20} ${:>8}", p.name(), format_amount(p.price()))?;
        }
        writeln!(out, "{RULE_LIGHT}")?;
        writeln!(out, "Total Amount: ${}", format_amount(self.total_amount))?;
        writeln!(out, "Status: {}", self.status)?;
        writeln!(
            out,
            "Order Date: {}",
            self.order_date.format(SUMMARY_DATE_FORMAT)
        )?;
        writeln!(out, "{RULE_HEAVY}")
    }
}
