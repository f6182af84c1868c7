//! # Cart Actor
//!
//! The cart store: one [`StateActor<Cart>`](state_actor::StateActor) owning the shopper's
//! cart, validating every change against the storefront's stock and persisting the whole
//! cart after each committed change.
//!
//! ## Structure
//!
//! - [`actions`] - [`CartAction`] and [`UpdateProductAmount`]
//! - [`context`] - [`CartContext`], the collaborators injected at `run()`
//! - [`entity`] - [`ActorState`](state_actor::ActorState) implementation for [`Cart`]
//! - [`error`] - [`CartError`] and the notice each variant maps to
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Operations
//!
//! | Action | Stock check | Absent id | Notice on failure |
//! |--------|-------------|-----------|-------------------|
//! | `AddProduct` | `amount + 1 <= stock` (new lines need `stock >= 1`) | appended with amount 1 | add failed |
//! | `RemoveProduct` | none | ignored | remove failed |
//! | `UpdateProductAmount` | `amount <= stock`, skipped when `amount <= 0` | ignored | amount-update failed |
//!
//! Exceeding stock always shows the stock-exceeded notice instead.
//!
//! ## Usage
//!
//! ```rust
//! use rocketshoes_cart::cart_actor::{self, CartContext};
//! use rocketshoes_cart::clients::{CartClient, InMemoryStorefront};
//! use rocketshoes_cart::model::{CatalogProduct, ProductId};
//! use rocketshoes_cart::notify::TracingNotifier;
//! use rocketshoes_cart::storage::MemoryStore;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let storefront = InMemoryStorefront::new()
//!         .with_product(CatalogProduct::new(1, "Tênis de Caminhada Leve Confortável", 179.9), 3);
//!     let context = CartContext::new(
//!         Arc::new(storefront),
//!         Arc::new(MemoryStore::new()),
//!         Arc::new(TracingNotifier),
//!     );
//!
//!     let (actor, generic_client) = cart_actor::new(32);
//!     tokio::spawn(actor.run(context));
//!     let cart = CartClient::new(generic_client);
//!
//!     let after = cart.add_product(ProductId(1)).await?;
//!     assert_eq!(after.find(ProductId(1)).map(|p| p.amount), Some(1));
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod context;
pub mod entity;
pub mod error;

pub use actions::*;
pub use context::*;
pub use error::*;

use crate::model::Cart;
use state_actor::{StateActor, StateClient};

/// Creates a new cart actor (starting empty until `run` hydrates it) and its client.
pub fn new(buffer_size: usize) -> (StateActor<Cart>, StateClient<Cart>) {
    StateActor::new(buffer_size)
}
