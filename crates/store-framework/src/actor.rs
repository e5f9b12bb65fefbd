//! # Store Actor
//!
//! This module defines the `StoreActor`, the component that exclusively owns one state
//! value. It implements the "Server" side of the Actor Model, processing requests
//! sequentially so that every transition sees the result of the previous one.

use crate::client::StoreClient;
use crate::message::{Snapshot, StoreRequest};
use crate::state::StoreState;
use tokio::sync::{mpsc, watch};
use tracing::{debug, info};

/// The actor that owns a single [`StoreState`] value.
///
/// # Architecture Note
/// This struct is the "Server" half of the store. It owns the state and the receiver end
/// of the request channel. Nobody else ever holds a mutable reference to the state:
/// readers get [`Snapshot`]s (cloned values), writers send actions.
///
/// **Concurrency Model**:
/// Requests are handled one at a time in arrival order. Two callers racing to dispatch
/// are serialized by the channel, so each transition is computed against the state left
/// by the previous one.
///
/// # Usage Pattern
///
/// ```rust
/// use store_framework::{StoreActor, StoreState};
///
/// #[derive(Clone, Debug, Default, PartialEq)]
/// struct Tags(Vec<String>);
///
/// impl StoreState for Tags {
///     type Action = String;
///     fn transition(&self, tag: String) -> Self {
///         let mut next = self.0.clone();
///         next.push(tag);
///         Tags(next)
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = StoreActor::<Tags>::new(10);
///     tokio::spawn(actor.run());
///
///     let snapshot = client.dispatch("rust".to_string()).await.unwrap();
///     assert_eq!(snapshot.version, 1);
///     assert_eq!(snapshot.state, Tags(vec!["rust".into()]));
/// }
/// ```
pub struct StoreActor<S: StoreState> {
    receiver: mpsc::Receiver<StoreRequest<S>>,
    state: S,
    version: u64,
    published: watch::Sender<Snapshot<S>>,
}

impl<S: StoreState> StoreActor<S> {
    /// Creates a new `StoreActor` starting from `S::default()`, and its client.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    pub fn new(buffer_size: usize) -> (Self, StoreClient<S>) {
        Self::with_state(buffer_size, S::default())
    }

    /// Creates a new `StoreActor` starting from `initial`, and its client.
    pub fn with_state(buffer_size: usize, initial: S) -> (Self, StoreClient<S>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let (published, snapshots) = watch::channel(Snapshot::new(0, initial.clone()));
        let actor = Self {
            receiver,
            state: initial,
            version: 0,
            published,
        };
        let client = StoreClient::new(sender, snapshots);
        (actor, client)
    }

    fn snapshot(&self) -> Snapshot<S> {
        Snapshot::new(self.version, self.state.clone())
    }

    /// Runs the actor's event loop, processing requests until every client is dropped.
    pub async fn run(mut self) {
        // Extract just the type name (e.g., "CatalogState" instead of the full module path)
        let state_type = std::any::type_name::<S>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(state_type, "Store started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Dispatch { action, respond_to } => {
                    debug!(state_type, ?action, "Dispatch");
                    self.state = self.state.transition(action);
                    self.version += 1;

                    let snapshot = self.snapshot();
                    self.published.send_replace(snapshot.clone());
                    info!(state_type, version = self.version, "Transitioned");
                    let _ = respond_to.send(Ok(snapshot));
                }
                StoreRequest::Snapshot { respond_to } => {
                    debug!(state_type, version = self.version, "Snapshot");
                    let _ = respond_to.send(Ok(self.snapshot()));
                }
            }
        }

        info!(state_type, version = self.version, "Shutdown");
    }
}
