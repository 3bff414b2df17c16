use thiserror::Error;

/// Error for ProductId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProductIdError {
    #[error("id is required")]
    Missing,

    #[error("invalid id: {0}")]
    InvalidFormat(String),
}

/// Error for product field validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProductValidationError {
    #[error("name is required")]
    EmptyName,

    #[error("price is required")]
    PriceRequired,

    #[error("invalid price")]
    InvalidPrice,
}

/// Top-level error type for all product-related operations
#[derive(Debug, Clone, Error)]
pub enum ProductError {
    #[error("Invalid product ID: {0}")]
    InvalidProductId(#[from] ProductIdError),

    #[error("Invalid product: {0}")]
    Validation(#[from] ProductValidationError),

    #[error("Product not found: {0}")]
    NotFound(String),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),
}
