use crate::catalog::{CatalogError, CATALOG_LOAD_FAILED};
use crate::product_store::ProductStoreError;
use store_framework::Cancelled;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorefrontError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Store(#[from] ProductStoreError),
    #[error(transparent)]
    Cancelled(#[from] Cancelled),
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}

impl StorefrontError {
    /// Text to show the visitor, if the error is theirs to see.
    pub fn user_message(&self) -> Option<&'static str> {
        match self {
            StorefrontError::Catalog(_) => Some(CATALOG_LOAD_FAILED),
            _ => None,
        }
    }
}
