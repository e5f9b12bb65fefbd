//! # Framework Errors
//!
//! This module defines the common error types used throughout the store framework.
//! By centralizing error definitions, we ensure consistent error handling across
//! every store and every client wrapper built on top of it.

/// Errors that can occur while talking to a store actor.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("Store closed")]
    StoreClosed,
    #[error("Store dropped response channel")]
    StoreDropped,
}

/// Returned when work was abandoned because its [`Scope`](crate::Scope) was cancelled.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("scope '{0}' was cancelled")]
pub struct Cancelled(pub String);
