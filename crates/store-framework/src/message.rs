//! # Generic Messages
//!
//! This module defines the message types used for communication between
//! the `StoreClient` and the `StoreActor`, plus the [`Snapshot`] value every
//! reader receives.

use crate::error::StoreError;
use crate::state::StoreState;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the store actor.
pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

/// An immutable copy of the state as of one point in the store's history.
///
/// `version` starts at `0` for the initial state and increases by exactly one for every
/// applied action, including actions that leave the content unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot<S> {
    pub version: u64,
    pub state: S,
}

impl<S> Snapshot<S> {
    pub fn new(version: u64, state: S) -> Self {
        Self { version, state }
    }

    /// Consumes the snapshot and returns the state value.
    pub fn into_state(self) -> S {
        self.state
    }
}

/// Internal message type sent to the store actor.
///
/// There are only two things a caller can ask of a store:
///
/// - **Dispatch**: apply one action through [`StoreState::transition`] and get the resulting snapshot back.
/// - **Snapshot**: read the current state without changing it.
#[derive(Debug)]
pub enum StoreRequest<S: StoreState> {
    Dispatch {
        action: S::Action,
        respond_to: Response<Snapshot<S>>,
    },
    Snapshot {
        respond_to: Response<Snapshot<S>>,
    },
}
