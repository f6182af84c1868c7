//! # Generic Actor Server
//!
//! This module defines the `StateActor`, the task that owns one state value and
//! processes every request against it sequentially.

use crate::client::StateClient;
use crate::error::FrameworkError;
use crate::message::StateRequest;
use crate::state::{ActorState, Transition};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that owns a single state value.
///
/// # Concurrency Model
/// The actor processes its messages *sequentially* in a loop, awaiting each action to
/// completion (including any I/O the action performs) before taking the next one.
/// The state needs no `Mutex`: exclusive ownership inside the task is the guard.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `StateActor::new()` to get the `actor` (server) and `client` (interface).
/// 2.  **Wire**: Pass dependencies into `actor.run(context)`.
/// 3.  **Run**: Spawn the run loop in a background task.
///
/// ```rust
/// use state_actor::{ActorState, StateActor, Transition};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug, Default)] struct Tally(Vec<u32>);
/// #[derive(Debug)] enum TallyAction { Push(u32) }
/// #[derive(Debug, thiserror::Error)] #[error("tally error")] struct TallyError;
///
/// #[async_trait]
/// impl ActorState for Tally {
///     type Action = TallyAction;
///     type Context = ();
///     type Error = TallyError;
///
///     async fn handle_action(&self, action: TallyAction, _: &()) -> Result<Transition<Self>, Self::Error> {
///         let TallyAction::Push(n) = action;
///         let mut next = self.0.clone();
///         next.push(n);
///         Ok(Transition::Replace(Tally(next)))
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = StateActor::<Tally>::new(10);
///     tokio::spawn(actor.run(()));
///
///     let tally = client.perform_action(TallyAction::Push(7)).await.unwrap();
///     assert_eq!(tally.0, vec![7]);
/// }
/// ```
///
/// ## Operations
///
/// * **Get**: replies with a clone of the current state.
/// * **Action**:
///     1. Calls `handle_action` with a borrow of the current state and the context.
///     2. On `Transition::Replace`, swaps the new value in.
///     3. Replies with the (possibly new) state, or with `StateError` if the hook failed.
///        A failed action never touches the held state.
pub struct StateActor<T: ActorState> {
    receiver: mpsc::Receiver<StateRequest<T>>,
    state: T,
}

impl<T: ActorState> StateActor<T> {
    /// Creates a new `StateActor` holding `T::default()` and its associated `StateClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client wait until there is space.
    pub fn new(buffer_size: usize) -> (Self, StateClient<T>) {
        Self::with_state(buffer_size, T::default())
    }

    /// Like [`StateActor::new`], starting from an explicit state.
    pub fn with_state(buffer_size: usize, state: T) -> (Self, StateClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self { receiver, state };
        (actor, StateClient::new(sender))
    }

    /// Runs the actor's event loop until every client has been dropped.
    ///
    /// # Context Injection
    /// `context` is handed to `on_start` and to every `handle_action` call.
    /// If `on_start` fails the actor logs the error and keeps serving the
    /// state it was constructed with.
    pub async fn run(mut self, context: T::Context) {
        let state_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");

        if let Err(e) = self.state.on_start(&context).await {
            warn!(state_type, error = %e, "on_start failed");
        }
        info!(state_type, size = self.state.size(), "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StateRequest::Get { respond_to } => {
                    debug!(state_type, size = self.state.size(), "Get");
                    let _ = respond_to.send(Ok(self.state.clone()));
                }
                StateRequest::Action { action, respond_to } => {
                    debug!(state_type, ?action, "Action");
                    let result = match self.state.handle_action(action, &context).await {
                        Ok(Transition::Replace(next)) => {
                            self.state = next;
                            info!(state_type, size = self.state.size(), "Replaced");
                            Ok(self.state.clone())
                        }
                        Ok(Transition::Unchanged) => {
                            debug!(state_type, "Unchanged");
                            Ok(self.state.clone())
                        }
                        Err(e) => {
                            warn!(state_type, error = %e, "Action failed");
                            Err(FrameworkError::StateError(Box::new(e)))
                        }
                    };
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(state_type, size = self.state.size(), "Shutdown");
    }
}
