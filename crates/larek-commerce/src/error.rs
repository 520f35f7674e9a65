//! Commerce error types.

use larek_data::FetchError;
use thiserror::Error;

use crate::checkout::ValidationErrors;
use crate::ids::ProductId;

/// Errors that can occur in storefront operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// The storefront API could not be reached or answered with an error.
    #[error(transparent)]
    Transport(#[from] FetchError),

    /// The API answered with a body of the wrong shape.
    #[error("Unexpected response from {endpoint}: {reason}")]
    UnexpectedResponse { endpoint: String, reason: String },

    /// Nothing to order.
    #[error("Cart is empty")]
    EmptyCart,

    /// Cart holds products without a price.
    #[error("Not for sale: {}", join_ids(.0))]
    NotForSale(Vec<ProductId>),

    /// Buyer data failed validation.
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    /// Checkout has no step in the requested direction.
    #[error("Invalid checkout transition: no step {direction} {from}")]
    InvalidCheckoutTransition { from: String, direction: String },

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}

fn join_ids(ids: &[ProductId]) -> String {
    ids.iter()
        .map(ProductId::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
