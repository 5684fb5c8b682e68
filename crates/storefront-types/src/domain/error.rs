use thiserror::Error;

/// Raised when an entity is constructed from arguments that break its invariants.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} must be positive")]
    MustBePositive { field: &'static str },

    #[error("{field} cannot be empty")]
    Required { field: &'static str },

    #[error("{field} cannot be negative")]
    Negative { field: &'static str },

    #[error("order must contain at least one product")]
    EmptyOrder,
}

/// Failures of cart and order operations against the current state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShopError {
    #[error("product is out of stock: {0}")]
    OutOfStock(String),

    #[error("shopping cart cannot contain more than {max} items")]
    CartFull { max: usize },

    #[error("product not found in cart: {0}")]
    NotInCart(String),

    #[error("invalid order status: {0}")]
    InvalidStatus(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        assert_eq!(
            ValidationError::MustBePositive { field: "price" }.to_string(),
            "price must be positive"
        );
        assert_eq!(
            ShopError::OutOfStock("Laptop".into()).to_string(),
            "product is out of stock: Laptop"
        );
        assert_eq!(
            ShopError::CartFull { max: 10 }.to_string(),
            "shopping cart cannot contain more than 10 items"
        );
    }

    #[test]
    fn validation_converts_into_shop_error() {
        let err: ShopError = ValidationError::EmptyOrder.into();
        assert_eq!(err, ShopError::Validation(ValidationError::EmptyOrder));
        assert_eq!(err.to_string(), "order must contain at least one product");
    }
}
