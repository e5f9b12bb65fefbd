//! # Product Store Client
//!
//! Provides a high‑level API for the product store. It wraps a `StoreClient<CatalogState>`
//! and exposes one method per action, so callers never build [`CatalogAction`]s by hand.
use crate::model::{Product, ProductId};
use crate::product_store::{CatalogAction, CatalogState, ProductStoreError};
use async_trait::async_trait;
use store_framework::{Snapshot, StoreAccess, StoreClient, StoreError};
use tokio::sync::watch;
use tracing::{debug, instrument};

/// Client for interacting with the product store.
#[derive(Clone)]
pub struct ProductStoreClient {
    inner: StoreClient<CatalogState>,
}

impl ProductStoreClient {
    pub fn new(inner: StoreClient<CatalogState>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl StoreAccess<CatalogState> for ProductStoreClient {
    type Error = ProductStoreError;

    fn inner(&self) -> &StoreClient<CatalogState> {
        &self.inner
    }

    fn map_error(e: StoreError) -> Self::Error {
        ProductStoreError::from(e)
    }
}

impl ProductStoreClient {
    /// Replaces the list with the freshly loaded catalog.
    #[instrument(skip(self, products), fields(count = products.len()))]
    pub async fn replace_all(
        &self,
        products: Vec<Product>,
    ) -> Result<Snapshot<CatalogState>, ProductStoreError> {
        debug!("Sending request");
        self.dispatch(CatalogAction::Get(products)).await
    }

    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub async fn add(&self, product: Product) -> Result<Snapshot<CatalogState>, ProductStoreError> {
        debug!("Sending request");
        self.dispatch(CatalogAction::Add(product)).await
    }

    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub async fn update(
        &self,
        product: Product,
    ) -> Result<Snapshot<CatalogState>, ProductStoreError> {
        debug!("Sending request");
        self.dispatch(CatalogAction::Update(product)).await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: ProductId) -> Result<Snapshot<CatalogState>, ProductStoreError> {
        debug!("Sending request");
        self.dispatch(CatalogAction::Delete(id)).await
    }

    /// Current product list.
    pub async fn products(&self) -> Result<Vec<Product>, ProductStoreError> {
        Ok(self.snapshot().await?.into_state().order_list)
    }

    /// Looks a product up by id in the current list.
    pub async fn find(&self, id: &ProductId) -> Result<Option<Product>, ProductStoreError> {
        Ok(self
            .products()
            .await?
            .into_iter()
            .find(|product| product.id == *id))
    }

    /// Receiver notified with a fresh snapshot after every transition.
    pub fn subscribe(&self) -> watch::Receiver<Snapshot<CatalogState>> {
        self.inner.subscribe()
    }
}
