//! # Mock Framework & Testing Guide
//!
//! The `MockStore<S>` type hands out a real `StoreClient<S>` whose requests are answered from a queue
//! of expectations instead of a running `StoreActor`. It lets you unit-test the logic *around* a store
//! (client wrappers, orchestration) without depending on the transition itself.
//!
//! ## When to use Mocks vs a Real Store
//!
//! | Feature | MockStore | Real StoreActor |
//! |---------|-----------|-----------------|
//! | **Speed** | Instant (in-memory) | Fast (but involves tokio spawn) |
//! | **State** | Canned snapshots | Real transitions |
//! | **Use Case** | Testing code that *calls* the store | Testing the state logic or the full system |
//! | **Error Injection** | Easy (`return_err`) | Only by stopping the actor |
//!
//! ## Testing Strategies
//!
//! 1. **Pure transition tests** – call `StoreState::transition` directly. No runtime needed.
//! 2. **Client logic tests** – use [`MockStore`] or [`create_mock_client`] and assert on the
//!    actions your wrapper sends.
//! 3. **Full system tests** – spawn the real actor and drive it through the public API.
//!
//! ```rust
//! use store_framework::mock::MockStore;
//! use store_framework::{Snapshot, StoreError, StoreState};
//!
//! #[derive(Clone, Debug, Default, PartialEq)]
//! struct Counter(i64);
//!
//! impl StoreState for Counter {
//!     type Action = i64;
//!     fn transition(&self, n: i64) -> Self { Counter(self.0 + n) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockStore::<Counter>::new();
//!     mock.expect_dispatch().return_ok(Snapshot::new(1, Counter(5)));
//!     mock.expect_snapshot().return_err(StoreError::StoreClosed);
//!
//!     let client = mock.client();
//!     assert_eq!(client.dispatch(5).await.unwrap().state, Counter(5));
//!     assert!(client.snapshot().await.is_err());
//!
//!     assert_eq!(mock.take_dispatched(), vec![5]);
//!     mock.verify();
//! }
//! ```
//!
//! ## Mocking Utilities
//!
//! Use [`create_mock_client`] to get a client and a receiver, or use the fluent [`MockStore`] API.

use crate::client::StoreClient;
use crate::error::StoreError;
use crate::message::{Response, Snapshot, StoreRequest};
use crate::state::StoreState;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, watch};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// An expected request and the response to give it.
enum Expectation<S: StoreState> {
    Dispatch {
        response: Result<Snapshot<S>, StoreError>,
    },
    Snapshot {
        response: Result<Snapshot<S>, StoreError>,
    },
}

type Queue<S> = Arc<Mutex<VecDeque<Expectation<S>>>>;

/// A mock store with expectation tracking for fluent testing.
pub struct MockStore<S: StoreState> {
    client: StoreClient<S>,
    expectations: Queue<S>,
    dispatched: Arc<Mutex<Vec<S::Action>>>,
    _published: watch::Sender<Snapshot<S>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<S: StoreState> Default for MockStore<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: StoreState> MockStore<S> {
    /// Creates a new mock store with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<StoreRequest<S>>(100);
        let (published, snapshots) = watch::channel(Snapshot::new(0, S::default()));
        let expectations: Queue<S> = Arc::new(Mutex::new(VecDeque::new()));
        let dispatched = Arc::new(Mutex::new(Vec::new()));

        let queue = expectations.clone();
        let recorded = dispatched.clone();
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = queue.lock().unwrap().pop_front();

                match (request, expectation) {
                    (
                        StoreRequest::Dispatch { action, respond_to },
                        Some(Expectation::Dispatch { response }),
                    ) => {
                        recorded.lock().unwrap().push(action);
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Snapshot { respond_to },
                        Some(Expectation::Snapshot { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: StoreClient::new(sender, snapshots),
            expectations,
            dispatched,
            _published: published,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> StoreClient<S> {
        self.client.clone()
    }

    /// Expects a `dispatch` request.
    pub fn expect_dispatch(&mut self) -> ExpectationBuilder<S> {
        ExpectationBuilder {
            kind: Kind::Dispatch,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `snapshot` request.
    pub fn expect_snapshot(&mut self) -> ExpectationBuilder<S> {
        ExpectationBuilder {
            kind: Kind::Snapshot,
            expectations: self.expectations.clone(),
        }
    }

    /// Drains and returns every action received so far, in order.
    pub fn take_dispatched(&self) -> Vec<S::Action> {
        std::mem::take(&mut *self.dispatched.lock().unwrap())
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

enum Kind {
    Dispatch,
    Snapshot,
}

/// Builder for a single expectation.
pub struct ExpectationBuilder<S: StoreState> {
    kind: Kind,
    expectations: Queue<S>,
}

impl<S: StoreState> ExpectationBuilder<S> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, snapshot: Snapshot<S>) {
        self.push(Ok(snapshot));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: StoreError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<Snapshot<S>, StoreError>) {
        let expectation = match self.kind {
            Kind::Dispatch => Expectation::Dispatch { response },
            Kind::Snapshot => Expectation::Snapshot { response },
        };
        self.expectations.lock().unwrap().push_back(expectation);
    }
}

// =============================================================================
// CHANNEL HELPERS
// =============================================================================

/// Creates a mock client and a receiver for asserting requests.
///
/// # Testing Strategy
/// The returned client sends its requests to a channel we control (`receiver`). Tests inspect
/// the messages arriving on that channel, assert they are correct, and answer them through the
/// responder. This allows simulating the store's behavior (success, failure, delays) deterministically.
///
/// **Note**: Consider using [`MockStore`] for a more fluent API.
pub fn create_mock_client<S: StoreState>(
    buffer_size: usize,
) -> (StoreClient<S>, mpsc::Receiver<StoreRequest<S>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    let (_published, snapshots) = watch::channel(Snapshot::new(0, S::default()));
    (StoreClient::new(sender, snapshots), receiver)
}

/// Helper to verify that the next message is a Dispatch request
pub async fn expect_dispatch<S: StoreState>(
    receiver: &mut mpsc::Receiver<StoreRequest<S>>,
) -> Option<(S::Action, Response<Snapshot<S>>)> {
    match receiver.recv().await {
        Some(StoreRequest::Dispatch { action, respond_to }) => Some((action, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Snapshot request
pub async fn expect_snapshot<S: StoreState>(
    receiver: &mut mpsc::Receiver<StoreRequest<S>>,
) -> Option<Response<Snapshot<S>>> {
    match receiver.recv().await {
        Some(StoreRequest::Snapshot { respond_to }) => Some(respond_to),
        _ => None,
    }
}
