//! Commerce error types.

use crate::ids::ProductId;
use thiserror::Error;

/// Errors that can occur in catalog and cart operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// Two catalog products share an id.
    #[error("Duplicate product id in catalog: {0}")]
    DuplicateProduct(ProductId),

    /// A catalog product has a negative price.
    #[error("Negative price for product {0}")]
    NegativePrice(ProductId),

    /// Two cart lines share an id.
    #[error("Duplicate cart line for product {0}")]
    DuplicateLine(ProductId),

    /// Invalid quantity.
    #[error("Invalid quantity {quantity} for product {product_id}")]
    InvalidQuantity { product_id: ProductId, quantity: u32 },

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in cart calculation")]
    Overflow,

    /// Cache error.
    #[error("Cache error: {0}")]
    CacheError(#[from] archiply_cache::CacheError),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}
