//! Type-safe handles: the [`CartClient`] wrapping the cart actor, and the
//! [`StorefrontApi`] the cart queries for stock and catalog data.

pub mod cart_client;
pub mod storefront;

pub use cart_client::*;
pub use storefront::*;
