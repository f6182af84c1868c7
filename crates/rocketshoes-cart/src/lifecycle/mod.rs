//! # System Lifecycle
//!
//! Builds the cart store from its collaborators, starts it, and shuts it down.
//!
//! The storefront's "provider at the root, hook everywhere" pattern becomes an explicit
//! object: [`CartSystem`] is created once at startup and hands out [`CartClient`](crate::clients::CartClient)
//! clones to whatever needs the cart.
//!
//! ```rust,ignore
//! let config = CartConfig::load(None)?;
//! let system = CartSystem::from_config(&config)?;
//!
//! system.cart_client.add_product(ProductId(1)).await?;
//!
//! system.shutdown().await?;
//! ```
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop the system's client** - the last sender closes the channel
//! 2. **The actor drains** - remaining requests are answered, then `recv()` returns `None`
//! 3. **Await completion** - the task logs the final cart size and ends
//!
//! Clones of the client handed out earlier keep the actor alive; drop them first.

pub mod cart_system;

pub use cart_system::*;
