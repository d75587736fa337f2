//! Error types for the Order actor.

use crate::product_actor::ProductError;
use crate::user_actor::UserError;
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// A requested item names a product that does not exist. Carries the identifier as the
    /// caller supplied it.
    #[error("Product {0} not found")]
    ProductNotFound(String),

    /// A requested quantity exceeds the product's stock.
    #[error("Insufficient stock for {product}")]
    InsufficientStock {
        product: String,
        requested: u32,
        available: u32,
    },

    /// The buyer placing the order is not a known user.
    #[error("Unknown buyer: {0}")]
    UnknownBuyer(String),

    /// The order data provided is invalid.
    #[error("Order validation error: {0}")]
    ValidationError(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for OrderError {
    fn from(msg: String) -> Self {
        OrderError::ActorCommunicationError(msg)
    }
}

impl From<ProductError> for OrderError {
    fn from(e: ProductError) -> Self {
        match e {
            ProductError::NotFound(id) => OrderError::ProductNotFound(id),
            ProductError::InsufficientStock {
                product,
                requested,
                available,
            } => OrderError::InsufficientStock {
                product,
                requested,
                available,
            },
            ProductError::ValidationError(msg) => OrderError::ValidationError(msg),
            ProductError::ActorCommunicationError(msg) => OrderError::ActorCommunicationError(msg),
        }
    }
}

impl From<UserError> for OrderError {
    fn from(e: UserError) -> Self {
        match e {
            UserError::NotFound(id) => OrderError::UnknownBuyer(id),
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}
