//! Error types for the cart actor.

use crate::clients::StorefrontError;
use crate::model::ProductId;
use crate::notify;
use crate::storage::StorageError;
use thiserror::Error;

/// What went wrong underneath a failed add or update.
#[derive(Debug, Error)]
pub enum CartFailure {
    #[error(transparent)]
    Storefront(#[from] StorefrontError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors that can occur during cart operations.
#[derive(Debug, Error)]
pub enum CartError {
    /// The requested quantity is above the stock reported for this call.
    #[error("Insufficient stock for product {product_id}: requested {requested}, available {available}")]
    OutOfStock {
        product_id: ProductId,
        requested: u64,
        available: u32,
    },

    #[error("Failed to add product {product_id}: {source}")]
    AddFailed {
        product_id: ProductId,
        #[source]
        source: CartFailure,
    },

    #[error("Failed to remove product {product_id}: {source}")]
    RemoveFailed {
        product_id: ProductId,
        #[source]
        source: StorageError,
    },

    #[error("Failed to update amount of product {product_id}: {source}")]
    UpdateFailed {
        product_id: ProductId,
        #[source]
        source: CartFailure,
    },

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl CartError {
    pub(crate) fn add_failed(product_id: ProductId, source: impl Into<CartFailure>) -> Self {
        CartError::AddFailed {
            product_id,
            source: source.into(),
        }
    }

    pub(crate) fn update_failed(product_id: ProductId, source: impl Into<CartFailure>) -> Self {
        CartError::UpdateFailed {
            product_id,
            source: source.into(),
        }
    }

    /// The message shown to the shopper for this error, if any.
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            CartError::OutOfStock { .. } => Some(notify::STOCK_EXCEEDED),
            CartError::AddFailed { .. } => Some(notify::ADD_FAILED),
            CartError::RemoveFailed { .. } => Some(notify::REMOVE_FAILED),
            CartError::UpdateFailed { .. } => Some(notify::UPDATE_FAILED),
            CartError::ActorCommunicationError(_) => None,
        }
    }
}

impl From<String> for CartError {
    fn from(msg: String) -> Self {
        CartError::ActorCommunicationError(msg)
    }
}
