//! Operations the cart actor accepts.

use crate::model::ProductId;

/// Cart operations, handled by [`Cart`](crate::model::Cart)'s
/// [`ActorState::handle_action`](state_actor::ActorState::handle_action).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartAction {
    /// Add one unit: increments an existing line or appends a new one with amount 1.
    AddProduct(ProductId),
    /// Drop the line for this product. Absent ids are ignored.
    RemoveProduct(ProductId),
    /// Overwrite the amount of an existing line.
    UpdateProductAmount(UpdateProductAmount),
}

/// Payload of [`CartAction::UpdateProductAmount`].
///
/// `amount` is signed because callers forward raw user input; anything `<= 0`
/// is ignored by the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateProductAmount {
    pub product_id: ProductId,
    pub amount: i64,
}
