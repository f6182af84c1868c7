//! Dependencies injected into the cart actor when it starts.

use crate::clients::StorefrontApi;
use crate::model::Cart;
use crate::notify::Notifier;
use crate::storage::{KeyValueStore, StorageError, CART_KEY};
use std::sync::Arc;

/// The collaborators the cart needs: inventory/catalog lookups, persistence and
/// user notifications.
#[derive(Clone)]
pub struct CartContext {
    pub storefront: Arc<dyn StorefrontApi>,
    pub storage: Arc<dyn KeyValueStore>,
    pub notifier: Arc<dyn Notifier>,
    pub storage_key: String,
}

impl CartContext {
    /// Context persisting under [`CART_KEY`].
    pub fn new(
        storefront: Arc<dyn StorefrontApi>,
        storage: Arc<dyn KeyValueStore>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            storefront,
            storage,
            notifier,
            storage_key: CART_KEY.to_string(),
        }
    }

    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Overwrites the persisted cart with `cart`.
    pub(crate) async fn persist(&self, cart: &Cart) -> Result<(), StorageError> {
        let text = serde_json::to_string(cart)?;
        self.storage.set(&self.storage_key, &text).await
    }
}
