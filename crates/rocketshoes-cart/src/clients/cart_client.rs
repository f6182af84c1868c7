//! # Cart Client
//!
//! The handle the rest of the application holds: the current cart plus the three
//! mutating operations. Cheap to clone; every clone talks to the same cart actor.
use crate::cart_actor::{CartAction, CartError, UpdateProductAmount};
use crate::model::{Cart, CartSummary, ProductId};
use async_trait::async_trait;
use state_actor::{ActorClient, FrameworkError, StateClient};
use tracing::{debug, instrument};

/// Client for interacting with the cart actor.
///
/// Failed operations have already shown their notice to the shopper by the time the
/// `Err` comes back; the error is returned for callers that want to react further.
#[derive(Clone)]
pub struct CartClient {
    inner: StateClient<Cart>,
}

impl CartClient {
    pub fn new(inner: StateClient<Cart>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Cart> for CartClient {
    type Error = CartError;

    fn inner(&self) -> &StateClient<Cart> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.downcast::<CartError>()
            .unwrap_or_else(|other| CartError::ActorCommunicationError(other.to_string()))
    }
}

impl CartClient {
    /// Current cart snapshot.
    pub async fn cart(&self) -> Result<Cart, CartError> {
        self.snapshot().await
    }

    /// Totals of the current cart.
    pub async fn summary(&self) -> Result<CartSummary, CartError> {
        Ok(self.snapshot().await?.summary())
    }

    /// Adds one unit of `id`, returning the cart afterwards.
    #[instrument(skip(self))]
    pub async fn add_product(&self, id: ProductId) -> Result<Cart, CartError> {
        debug!("Sending request");
        self.perform(CartAction::AddProduct(id)).await
    }

    /// Removes the line for `id`, returning the cart afterwards.
    #[instrument(skip(self))]
    pub async fn remove_product(&self, id: ProductId) -> Result<Cart, CartError> {
        debug!("Sending request");
        self.perform(CartAction::RemoveProduct(id)).await
    }

    /// Sets the amount of an existing line, returning the cart afterwards.
    #[instrument(skip(self))]
    pub async fn update_product_amount(
        &self,
        update: UpdateProductAmount,
    ) -> Result<Cart, CartError> {
        debug!("Sending request");
        self.perform(CartAction::UpdateProductAmount(update)).await
    }

    async fn perform(&self, action: CartAction) -> Result<Cart, CartError> {
        self.inner
            .perform_action(action)
            .await
            .map_err(Self::map_error)
    }
}
