//! # StoreAccess Trait
//!
//! Provides a common interface for domain‑specific store clients, adding default `snapshot` and
//! `dispatch` methods built on top of a generic `StoreClient`.
use crate::{Snapshot, StoreClient, StoreError, StoreState};
use async_trait::async_trait;

/// Trait for domain-specific clients to inherit the standard store operations.
///
/// # Example
///
/// ```rust
/// use store_framework::{StoreAccess, StoreClient, StoreError, StoreState};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug, Default)]
/// struct Cart { items: Vec<String> }
///
/// impl StoreState for Cart {
///     type Action = String;
///     fn transition(&self, item: String) -> Self {
///         let mut items = self.items.clone();
///         items.push(item);
///         Self { items }
///     }
/// }
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("cart unavailable: {0}")]
/// struct CartError(String);
///
/// struct CartClient { inner: StoreClient<Cart> }
///
/// #[async_trait]
/// impl StoreAccess<Cart> for CartClient {
///     type Error = CartError;
///
///     fn inner(&self) -> &StoreClient<Cart> { &self.inner }
///
///     fn map_error(e: StoreError) -> Self::Error { CartError(e.to_string()) }
/// }
///
/// async fn usage(client: CartClient) {
///     // snapshot() and dispatch() are provided automatically!
///     let _ = client.dispatch("apple".into()).await;
///     let _ = client.snapshot().await;
/// }
/// ```
#[async_trait]
pub trait StoreAccess<S: StoreState>: Send + Sync {
    /// The domain-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic StoreClient.
    fn inner(&self) -> &StoreClient<S>;

    /// Map framework errors to the domain error type.
    fn map_error(e: StoreError) -> Self::Error;

    /// Read the current state.
    #[tracing::instrument(skip(self))]
    async fn snapshot(&self) -> Result<Snapshot<S>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().snapshot().await.map_err(Self::map_error)
    }

    /// Apply one action.
    #[tracing::instrument(skip(self))]
    async fn dispatch(&self, action: S::Action) -> Result<Snapshot<S>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().dispatch(action).await.map_err(Self::map_error)
    }
}
