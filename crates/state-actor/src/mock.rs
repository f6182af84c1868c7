//! # Mock Framework & Testing Guide
//!
//! `MockClient<T>` hands out a real [`StateClient<T>`] whose requests are answered from a
//! queue of scripted expectations instead of a running [`StateActor`](crate::StateActor).
//! Use it to test the logic that sits *around* a client (argument mapping, error mapping)
//! without spinning up the state and its collaborators.
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **State** | Scripted responses | Real state transitions |
//! | **Error Injection** | Easy (`return_err`) | Requires a failing collaborator |
//! | **Use Case** | Client wrappers | The state logic itself, full system |
//!
//! ```rust
//! use state_actor::mock::MockClient;
//! use state_actor::{ActorState, FrameworkError, Transition};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug, Default, PartialEq)] struct Flag(bool);
//! #[derive(Debug)] enum FlagAction { Toggle }
//! #[derive(Debug, thiserror::Error)] #[error("flag error")] struct FlagError;
//!
//! #[async_trait]
//! impl ActorState for Flag {
//!     type Action = FlagAction;
//!     type Context = ();
//!     type Error = FlagError;
//!     async fn handle_action(&self, _: FlagAction, _: &()) -> Result<Transition<Self>, Self::Error> {
//!         Ok(Transition::Replace(Flag(!self.0)))
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Flag>::new();
//!     mock.expect_action().return_ok(Flag(true));
//!     mock.expect_get().return_err(FrameworkError::ActorClosed);
//!
//!     let client = mock.client();
//!     assert_eq!(client.perform_action(FlagAction::Toggle).await.unwrap(), Flag(true));
//!     assert!(matches!(client.get().await, Err(FrameworkError::ActorClosed)));
//!     mock.verify();
//! }
//! ```
//!
//! For assertions on the exact action a client sent, use [`create_mock_client`] with
//! [`expect_action`] and answer through the returned responder.

use crate::client::StateClient;
use crate::error::FrameworkError;
use crate::message::StateRequest;
use crate::state::ActorState;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

enum Expectation<T: ActorState> {
    Get {
        response: Result<T, FrameworkError>,
    },
    Action {
        response: Result<T, FrameworkError>,
    },
}

type Expectations<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock client with expectation tracking for fluent testing.
pub struct MockClient<T: ActorState> {
    client: StateClient<T>,
    expectations: Expectations<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorState> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorState> MockClient<T> {
    /// Creates a new mock client with no expectations.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<StateRequest<T>>(100);
        let expectations: Expectations<T> = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone
                    .lock()
                    .expect("mock expectations poisoned")
                    .pop_front();

                match (request, expectation) {
                    (StateRequest::Get { respond_to }, Some(Expectation::Get { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StateRequest::Action { respond_to, .. },
                        Some(Expectation::Action { response }),
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
            client: StateClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> StateClient<T> {
        self.client.clone()
    }

    /// Expects a `get` request.
    pub fn expect_get(&mut self) -> ExpectationBuilder<T> {
        ExpectationBuilder {
            kind: Kind::Get,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `perform_action` request.
    pub fn expect_action(&mut self) -> ExpectationBuilder<T> {
        ExpectationBuilder {
            kind: Kind::Action,
            expectations: self.expectations.clone(),
        }
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().expect("mock expectations poisoned");
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

enum Kind {
    Get,
    Action,
}

/// Builder returned by [`MockClient::expect_get`] and [`MockClient::expect_action`].
pub struct ExpectationBuilder<T: ActorState> {
    kind: Kind,
    expectations: Expectations<T>,
}

impl<T: ActorState> ExpectationBuilder<T> {
    /// Answer the request with this state.
    pub fn return_ok(self, state: T) {
        self.push(Ok(state));
    }

    /// Answer the request with an error.
    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<T, FrameworkError>) {
        let expectation = match self.kind {
            Kind::Get => Expectation::Get { response },
            Kind::Action => Expectation::Action { response },
        };
        self.expectations
            .lock()
            .expect("mock expectations poisoned")
            .push_back(expectation);
    }
}

// =============================================================================
// CHANNEL-LEVEL HELPERS
// =============================================================================

/// Creates a client and the receiver its requests arrive on.
///
/// The test plays the actor: pull requests off the receiver with [`expect_get`] or
/// [`expect_action`], inspect them, and answer through the responder.
pub fn create_mock_client<T: ActorState>(
    buffer_size: usize,
) -> (StateClient<T>, mpsc::Receiver<StateRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (StateClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: ActorState>(
    receiver: &mut mpsc::Receiver<StateRequest<T>>,
) -> Option<oneshot::Sender<Result<T, FrameworkError>>> {
    match receiver.recv().await {
        Some(StateRequest::Get { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next message is an Action request
pub async fn expect_action<T: ActorState>(
    receiver: &mut mpsc::Receiver<StateRequest<T>>,
) -> Option<(T::Action, oneshot::Sender<Result<T, FrameworkError>>)> {
    match receiver.recv().await {
        Some(StateRequest::Action { action, respond_to }) => Some((action, respond_to)),
        _ => None,
    }
}
