//! Pure data structures: the cart value and the product types it is made of.

pub mod cart;
pub mod product;

pub use cart::*;
pub use product::*;
