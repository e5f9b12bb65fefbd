//! # Product Store
//!
//! The client-side state of the storefront: the product list and the four actions that
//! change it.
//!
//! ## Structure
//!
//! - [`state`] - [`CatalogState`] and its pure transition
//! - [`actions`] - [`CatalogAction`] and its JSON wire form
//! - [`error`] - [`ProductStoreError`]
//! - [`new()`] - Factory function that creates the store actor and its client
//!
//! ## Usage
//!
//! ```rust
//! use storefront::model::Product;
//! use storefront::product_store::{self, CatalogAction};
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = product_store::new();
//!     tokio::spawn(actor.run());
//!
//!     let snapshot = client
//!         .dispatch(CatalogAction::Add(Product::new(1u64, "Lamp", 20.0)))
//!         .await
//!         .unwrap();
//!     assert_eq!(snapshot.state.order_list.len(), 1);
//! }
//! ```

pub mod actions;
pub mod error;
pub mod state;

pub use actions::*;
pub use error::*;
pub use state::*;

use store_framework::{StoreActor, StoreClient};

/// Creates a new product store actor, starting from an empty list, and its client.
pub fn new() -> (StoreActor<CatalogState>, StoreClient<CatalogState>) {
    StoreActor::new(32)
}
