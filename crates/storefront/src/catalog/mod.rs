//! # Catalog Loader
//!
//! Where the initial product list comes from. The storefront only needs a
//! [`CatalogSource`]; the production source is [`HttpCatalog`], tests and offline demos use
//! [`StaticCatalog`]. Loading happens once per view and is never retried.

mod error;
mod http;

pub use error::{CatalogError, CATALOG_LOAD_FAILED};
pub use http::HttpCatalog;

use crate::model::Product;
use async_trait::async_trait;

#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError>;
}

/// Serves a fixed product list.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    products: Vec<Product>,
}

impl StaticCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }
}

#[async_trait]
impl CatalogSource for StaticCatalog {
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        Ok(self.products.clone())
    }
}
