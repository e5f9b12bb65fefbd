//! # Scoped Effect Lifetimes
//!
//! A [`Scope`] ties asynchronous work (HTTP calls, notifications) to the lifetime of whoever
//! requested it. When the requester goes away its scope is cancelled, and any work still
//! running under it is dropped before it can touch the store.
//!
//! Scopes form a tree: [`Scope::child`] creates a scope that is cancelled together with its
//! parent, but can also be cancelled on its own. A typical application owns one root scope
//! and hands each view a child.
//!
//! ```rust
//! use store_framework::Scope;
//!
//! #[tokio::main]
//! async fn main() {
//!     let root = Scope::root("app");
//!     let view = root.child("catalog-view");
//!
//!     let value = view.run(async { 42 }).await;
//!     assert_eq!(value, Ok(42));
//!
//!     root.cancel();
//!     assert!(view.is_cancelled());
//!     assert!(view.run(async { 42 }).await.is_err());
//! }
//! ```

use crate::error::Cancelled;
use std::future::Future;
use tokio_util::sync::{CancellationToken, DropGuard};
use tracing::debug;

/// A cancellable lifetime for in-flight work.
#[derive(Debug, Clone)]
pub struct Scope {
    label: String,
    token: CancellationToken,
}

impl Scope {
    /// Creates a scope with no parent.
    pub fn root(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            token: CancellationToken::new(),
        }
    }

    /// Creates a scope that is cancelled whenever `self` is.
    pub fn child(&self, label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            token: self.token.child_token(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Cancels this scope and every child scope.
    pub fn cancel(&self) {
        debug!(scope = %self.label, "Scope cancelled");
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Completes once the scope is cancelled.
    pub async fn cancelled(&self) {
        self.token.cancelled().await
    }

    /// Drives `work` to completion unless the scope is cancelled first.
    ///
    /// Work submitted to an already-cancelled scope is never polled.
    pub async fn run<F>(&self, work: F) -> Result<F::Output, Cancelled>
    where
        F: Future,
    {
        if self.token.is_cancelled() {
            return Err(Cancelled(self.label.clone()));
        }
        tokio::select! {
            biased;
            _ = self.token.cancelled() => {
                debug!(scope = %self.label, "Work dropped in flight");
                Err(Cancelled(self.label.clone()))
            }
            output = work => Ok(output),
        }
    }

    /// Returns a guard that cancels this scope when dropped.
    ///
    /// Hold it for as long as the owning view is alive.
    pub fn guard(&self) -> ScopeGuard {
        ScopeGuard {
            _guard: self.token.clone().drop_guard(),
        }
    }
}

/// Cancels its [`Scope`] on drop.
#[derive(Debug)]
pub struct ScopeGuard {
    _guard: DropGuard,
}
