//! # ActorState Trait
//!
//! The `ActorState` trait defines the contract a value must satisfy to be owned by a
//! [`StateActor`](crate::StateActor). The actor holds exactly one instance of the state,
//! hands out clones of it as snapshots, and replaces it wholesale whenever an action
//! produces a new value.
//!
//! # Snapshot Replacement
//! Actions never mutate the current state in place. [`ActorState::handle_action`] receives
//! `&self` and returns a [`Transition`]: either `Unchanged`, or `Replace` carrying the next
//! value. The actor swaps the value in only after the hook returns `Ok`, so a failed action
//! cannot leave a half-applied state behind.
//!
//! # Provided Methods (Hooks)
//! - [`ActorState::on_start`] runs once inside [`StateActor::run`](crate::StateActor::run),
//!   before the first request is processed. The default does nothing.

use async_trait::async_trait;
use std::fmt::Debug;

/// Result of applying an action to the current state.
#[derive(Debug, Clone, PartialEq)]
pub enum Transition<S> {
    /// Keep the current value.
    Unchanged,
    /// Swap in a new value.
    Replace(S),
}

/// Trait that any state value must implement to be managed by `StateActor`.
///
/// # Async & Context
/// Hooks are `#[async_trait]` so they can await collaborators (HTTP clients, storage).
/// The `Context` type is injected into every hook when the actor starts running, which
/// keeps construction free of dependencies ("late binding").
#[async_trait]
pub trait ActorState: Clone + Default + Send + Sync + 'static {
    /// Enum of the operations the state supports.
    type Action: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this state.
    ///
    /// One error enum covers every action. Clients recover it from
    /// [`FrameworkError::StateError`](crate::FrameworkError::StateError) by downcasting.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Number of items held, used only for logging.
    fn size(&self) -> usize {
        0
    }

    /// Called once when the actor starts, before any request is served.
    /// Use this hook to hydrate the state from the context (e.g. persisted storage).
    async fn on_start(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Apply an action against the current snapshot.
    async fn handle_action(
        &self,
        action: Self::Action,
        ctx: &Self::Context,
    ) -> Result<Transition<Self>, Self::Error>;
}
