use storefront_types::domain::error::{ShopError, ValidationError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Product not found: {0}")]
    NotFound(String),

    #[error("Your cart is empty")]
    EmptyCart,

    #[error("No order ids left after {last}")]
    OrderIdsExhausted { last: i64 },

    #[error(transparent)]
    Shop(#[from] ShopError),

    #[error("Maximum attempts reached ({attempts}). No valid input provided.")]
    InputExhausted { attempts: u32 },

    #[error("Input closed before a value was provided")]
    EndOfInput,

    #[error("Console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ValidationError> for AppError {
    fn from(e: ValidationError) -> Self {
        AppError::Shop(e.into())
    }
}

impl AppError {
    /// Errors after which the session cannot go on reading commands.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            AppError::InputExhausted { .. } | AppError::EndOfInput | AppError::Io(_)
        )
    }
}
