//! # State Actor
//!
//! Building blocks for a single-owner state store on top of Tokio: one task owns one
//! value, every request is processed in order, and callers interact through a cloneable
//! client.
//!
//! ## Why an actor for a single value?
//!
//! - **Isolated state**: no shared memory and no locks around the value.
//! - **Sequential processing**: an action, including the I/O it awaits, completes before
//!   the next request is looked at, so two callers can never interleave on stale reads.
//! - **Snapshot replacement**: actions compute a new value from a borrow of the old one;
//!   the actor swaps it in only on success.
//!
//! ## Architecture Overview
//!
//! 1. **State Layer** ([`ActorState`]) - the domain value and its actions
//! 2. **Runtime Layer** ([`StateActor`]) - message loop, context injection
//! 3. **Interface Layer** ([`StateClient`], [`ActorClient`]) - typed handles
//!
//! ## Context Injection Pattern
//!
//! Dependencies are injected when the actor starts running, not when it is built:
//!
//! ```rust
//! use state_actor::{ActorState, StateActor, Transition};
//! use async_trait::async_trait;
//! use std::sync::Arc;
//!
//! trait Clock: Send + Sync { fn now(&self) -> u64; }
//! struct Fixed(u64);
//! impl Clock for Fixed { fn now(&self) -> u64 { self.0 } }
//!
//! #[derive(Clone, Debug, Default)] struct LastSeen(Option<u64>);
//! #[derive(Debug)] enum SeenAction { Touch }
//! #[derive(Debug, thiserror::Error)] #[error("seen error")] struct SeenError;
//!
//! #[async_trait]
//! impl ActorState for LastSeen {
//!     type Action = SeenAction;
//!     type Context = Arc<dyn Clock>;
//!     type Error = SeenError;
//!
//!     async fn handle_action(&self, _: SeenAction, clock: &Arc<dyn Clock>) -> Result<Transition<Self>, Self::Error> {
//!         Ok(Transition::Replace(LastSeen(Some(clock.now()))))
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = StateActor::<LastSeen>::new(10);
//!     tokio::spawn(actor.run(Arc::new(Fixed(42))));
//!
//!     let seen = client.perform_action(SeenAction::Touch).await.unwrap();
//!     assert_eq!(seen.0, Some(42));
//! }
//! ```
//!
//! ## Testing
//!
//! See the [`mock`] module for `MockClient`, which answers client requests from scripted
//! expectations without running an actor.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod error;
pub mod message;
pub mod mock;
pub mod state;
pub mod tracing;

pub use actor::StateActor;
pub use client::StateClient;
pub use client_trait::ActorClient;
pub use error::FrameworkError;
pub use message::{Response, StateRequest};
pub use state::{ActorState, Transition};
