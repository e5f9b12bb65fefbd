//! # Storefront Library
//!
//! This library exposes the core modules of the storefront for the binary and for
//! integration testing.

pub mod catalog;
pub mod clients;
pub mod config;
pub mod lifecycle;
pub mod model;
pub mod notifier;
pub mod product_store;
