//! Type-safe wrappers around [`StoreClient`](store_framework::StoreClient).

pub mod product_store_client;

pub use product_store_client::*;
