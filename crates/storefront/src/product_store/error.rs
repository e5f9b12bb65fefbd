//! Error types for the product store.

use thiserror::Error;

/// Errors that can occur while talking to the product store.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProductStoreError {
    /// The store actor is gone or dropped the request.
    #[error("Product store unavailable: {0}")]
    Unavailable(String),
}

impl From<store_framework::StoreError> for ProductStoreError {
    fn from(e: store_framework::StoreError) -> Self {
        ProductStoreError::Unavailable(e.to_string())
    }
}
