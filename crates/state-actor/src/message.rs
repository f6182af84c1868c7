//! # Generic Messages
//!
//! Message types exchanged between a [`StateClient`](crate::StateClient) and its
//! [`StateActor`](crate::StateActor).

use crate::error::FrameworkError;
use crate::state::ActorState;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Request sent to the actor.
///
/// There are only two shapes of interaction with a single-state actor:
///
/// - **Get**: read the current snapshot.
/// - **Action**: run an [`ActorState::Action`] and receive the snapshot that is current
///   once the action has been applied (the old one if the action left the state alone).
#[derive(Debug)]
pub enum StateRequest<T: ActorState> {
    Get {
        respond_to: Response<T>,
    },
    Action {
        action: T::Action,
        respond_to: Response<T>,
    },
}
