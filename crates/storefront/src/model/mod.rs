//! Pure data structures shared by the store, the notifier and the catalog loader.

pub mod contact;
pub mod product;

pub use contact::*;
pub use product::*;
