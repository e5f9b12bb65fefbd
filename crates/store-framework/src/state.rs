//! # StoreState Trait
//!
//! The `StoreState` trait is the contract every state value managed by a [`StoreActor`](crate::StoreActor)
//! implements. It names the action type the state accepts and the pure transition that turns
//! the current state plus one action into the next state.
//!
//! # Architecture Note
//! The transition is a plain synchronous function of `(&Self, Action) -> Self`:
//!
//! - it never mutates the current value in place,
//! - it never performs I/O,
//! - it never fails.
//!
//! Everything with a side effect (HTTP calls, notifications) happens *around* the transition,
//! in the caller. This keeps the state logic trivially testable: no runtime, no channels, just
//! `assert_eq!(state.transition(action), expected)`.
//!
//! The actor is what makes the state *owned*: exactly one task holds the current value and
//! applies actions in arrival order, so no `Mutex` or `RwLock` is needed around it.

use std::fmt::Debug;

/// A state value that can be owned by a [`StoreActor`](crate::StoreActor).
///
/// # Example
///
/// ```rust
/// use store_framework::StoreState;
///
/// #[derive(Clone, Debug, Default, PartialEq)]
/// struct Counter { value: i64 }
///
/// #[derive(Debug)]
/// enum CounterAction { Add(i64), Reset }
///
/// impl StoreState for Counter {
///     type Action = CounterAction;
///
///     fn transition(&self, action: CounterAction) -> Self {
///         match action {
///             CounterAction::Add(n) => Self { value: self.value + n },
///             CounterAction::Reset => Self::default(),
///         }
///     }
/// }
///
/// let next = Counter::default().transition(CounterAction::Add(2));
/// assert_eq!(next.value, 2);
/// ```
pub trait StoreState: Clone + Debug + Default + Send + Sync + 'static {
    /// The tagged payload describing one requested change.
    type Action: Send + Debug + 'static;

    /// Computes the next state from `self` and `action`.
    ///
    /// Must be pure: the returned value is fresh and `self` is left untouched.
    fn transition(&self, action: Self::Action) -> Self;
}
