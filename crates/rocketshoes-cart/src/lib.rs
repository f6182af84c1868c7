//! # RocketShoes Cart
//!
//! Shopping-cart state for the RocketShoes storefront: add, remove and re-quantify
//! products, validated against the storefront's live stock and persisted after every
//! change.
//!
//! ## Module Tour
//!
//! - **[model]**: [`Cart`](model::Cart), [`Product`](model::Product) and friends. Pure values.
//! - **[cart_actor]**: the cart store. Implements
//!   [`ActorState`](state_actor::ActorState) for `Cart`, so a single task owns the cart.
//! - **[clients]**: [`CartClient`](clients::CartClient), the handle consumers hold, and the
//!   [`StorefrontApi`](clients::StorefrontApi) for stock and catalog lookups.
//! - **[storage]**: where the cart is persisted ([`FileStore`](storage::FileStore),
//!   [`MemoryStore`](storage::MemoryStore)).
//! - **[notify]**: how failures reach the shopper.
//! - **[config]**, **[lifecycle]**: wiring for the binary.
//!
//! ## Testing
//!
//! Collaborators are traits, so tests run the real cart actor against
//! [`InMemoryStorefront`](clients::InMemoryStorefront), `MemoryStore` and
//! [`RecordingNotifier`](notify::RecordingNotifier). Client wrappers are tested with
//! [`state_actor::mock`].

pub mod cart_actor;
pub mod clients;
pub mod config;
pub mod lifecycle;
pub mod model;
pub mod notify;
pub mod storage;
