//! # Store Framework
//!
//! This crate provides the building blocks for keeping application state in a single owned place
//! and changing it only through pure transitions. It applies the **Actor Model** to client-side
//! state: one task owns the state value, every change is a message, every reader gets a copy.
//!
//! ## Why an Actor for State?
//!
//! - **One owner**: the state lives inside exactly one [`StoreActor`]. There is no global
//!   singleton and no `Mutex` around the value.
//! - **Pure transitions**: the actor only calls [`StoreState::transition`], a synchronous
//!   `(&State, Action) -> State` function. All side effects live outside it.
//! - **Ordering**: actions are applied strictly in arrival order, so two racing callers always
//!   produce a well-defined sequence of states.
//! - **Snapshots**: readers get [`Snapshot`] values (version + cloned state) and can subscribe
//!   to every transition through a watch channel.
//!
//! **Further Reading**:
//! - [Actors in Rust](https://ryhl.io/blog/actors-with-tokio/) - Practical guide to implementing actors with Tokio
//!
//! ## Architecture Overview
//!
//! 1. **State Layer** ([`StoreState`]) - your state type and its pure transition
//! 2. **Runtime Layer** ([`StoreActor`]) - request processing and ownership
//! 3. **Interface Layer** ([`StoreClient`], [`StoreAccess`]) - type-safe communication
//! 4. **Lifetime Layer** ([`Scope`]) - cancellation for work that feeds the store
//!
//! ```rust
//! use store_framework::{StoreActor, StoreState};
//!
//! #[derive(Clone, Debug, Default, PartialEq)]
//! struct Todo { items: Vec<String> }
//!
//! #[derive(Debug)]
//! enum TodoAction { Add(String), Clear }
//!
//! impl StoreState for Todo {
//!     type Action = TodoAction;
//!
//!     fn transition(&self, action: TodoAction) -> Self {
//!         match action {
//!             TodoAction::Add(item) => {
//!                 let mut items = self.items.clone();
//!                 items.push(item);
//!                 Self { items }
//!             }
//!             TodoAction::Clear => Self::default(),
//!         }
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = StoreActor::<Todo>::new(10);
//!     let handle = tokio::spawn(actor.run());
//!
//!     client.dispatch(TodoAction::Add("write tests".into())).await.unwrap();
//!     let snapshot = client.snapshot().await.unwrap();
//!     assert_eq!(snapshot.state.items, vec!["write tests".to_string()]);
//!
//!     // Dropping the last client stops the actor
//!     drop(client);
//!     handle.await.unwrap();
//! }
//! ```
//!
//! ## Testing
//!
//! The [`mock`] module provides `MockStore`, which answers requests from a queue of canned
//! snapshots and records every dispatched action, plus channel-level helpers for fine-grained
//! assertions.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod error;
pub mod message;
pub mod mock;
pub mod scope;
pub mod state;
pub mod tracing;

// Re-export core types for convenience
pub use actor::StoreActor;
pub use client::StoreClient;
pub use client_trait::StoreAccess;
pub use error::{Cancelled, StoreError};
pub use message::{Response, Snapshot, StoreRequest};
pub use scope::{Scope, ScopeGuard};
pub use state::StoreState;
