use crate::cart_actor::{self, CartContext};
use crate::clients::{CartClient, HttpStorefront, StorefrontError};
use crate::config::CartConfig;
use crate::notify::TracingNotifier;
use crate::storage::FileStore;
use std::sync::Arc;
use tracing::{error, info};

/// Owns the running cart actor.
///
/// # Example
///
/// ```ignore
/// let system = CartSystem::new(context, 32);
/// let cart = system.cart_client.add_product(ProductId(3)).await?;
/// system.shutdown().await?;
/// ```
pub struct CartSystem {
    /// Client for interacting with the cart actor
    pub cart_client: CartClient,

    handle: tokio::task::JoinHandle<()>,
}

impl CartSystem {
    /// Spawns the cart actor with `context` injected.
    ///
    /// Must be called from within a Tokio runtime. The actor hydrates the cart from
    /// storage before serving its first request.
    pub fn new(context: CartContext, channel_capacity: usize) -> Self {
        let (actor, generic_client) = cart_actor::new(channel_capacity);
        let handle = tokio::spawn(actor.run(context));

        Self {
            cart_client: CartClient::new(generic_client),
            handle,
        }
    }

    /// Production wiring: HTTP storefront, file-backed storage, log notifications.
    pub fn from_config(config: &CartConfig) -> Result<Self, StorefrontError> {
        let storefront = HttpStorefront::new(config.api.base_url.clone())?;
        let storage = FileStore::new(config.storage.path.clone());
        info!(
            api = %storefront.base_url(),
            storage = %storage.path().display(),
            "Starting cart"
        );

        let context = CartContext::new(
            Arc::new(storefront),
            Arc::new(storage),
            Arc::new(TracingNotifier),
        )
        .with_storage_key(config.storage.key.clone());
        Ok(Self::new(context, config.channel_capacity))
    }

    /// Gracefully shuts down the cart actor.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if the actor shut down cleanly
    /// - `Err(String)` if the actor task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down cart...");
        drop(self.cart_client);

        if let Err(e) = self.handle.await {
            error!("Cart actor task failed: {:?}", e);
            return Err(format!("Cart actor task failed: {:?}", e));
        }

        info!("Cart shutdown complete.");
        Ok(())
    }
}
