//! # Generic Client
//!
//! This module defines the generic client for communicating with a store actor.

use crate::error::StoreError;
use crate::message::{Snapshot, StoreRequest};
use crate::state::StoreState;
use tokio::sync::{mpsc, oneshot, watch};

/// ## StoreClient
///
/// The `StoreClient<S>` provides a type‑safe, async API for interacting with a `StoreActor<S>`.
/// It forwards dispatch and snapshot requests over a Tokio mpsc channel and receives results via
/// oneshot channels. The client is cheap to clone and can be shared across tasks.
///
/// * **Cloneable** – holds only a sender and a watch receiver.
/// * **Async API** – all requests resolve to `Result<Snapshot<S>, StoreError>`.
/// * **Observable** – [`StoreClient::subscribe`] yields every snapshot published after a transition.
#[derive(Clone)]
pub struct StoreClient<S: StoreState> {
    sender: mpsc::Sender<StoreRequest<S>>,
    snapshots: watch::Receiver<Snapshot<S>>,
}

impl<S: StoreState> StoreClient<S> {
    pub fn new(sender: mpsc::Sender<StoreRequest<S>>, snapshots: watch::Receiver<Snapshot<S>>) -> Self {
        Self { sender, snapshots }
    }

    /// Applies `action` and returns the snapshot produced by the transition.
    pub async fn dispatch(&self, action: S::Action) -> Result<Snapshot<S>, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Dispatch { action, respond_to })
            .await
            .map_err(|_| StoreError::StoreClosed)?;
        response.await.map_err(|_| StoreError::StoreDropped)?
    }

    /// Reads the current state.
    pub async fn snapshot(&self) -> Result<Snapshot<S>, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Snapshot { respond_to })
            .await
            .map_err(|_| StoreError::StoreClosed)?;
        response.await.map_err(|_| StoreError::StoreDropped)?
    }

    /// Returns a receiver that is notified with a fresh snapshot after every transition.
    pub fn subscribe(&self) -> watch::Receiver<Snapshot<S>> {
        self.snapshots.clone()
    }

    /// True once the actor has stopped accepting requests.
    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}
