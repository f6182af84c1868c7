//! # Storefront API
//!
//! The inventory and catalog the cart validates against:
//!
//! - `GET {base}/stock/{id}` → [`Stock`]
//! - `GET {base}/products/{id}` → [`CatalogProduct`]
//!
//! [`HttpStorefront`] talks to the real service with `reqwest`. [`InMemoryStorefront`]
//! serves fixed data and is what tests and offline runs use.

use crate::model::{CatalogProduct, ProductId, Stock};
use async_trait::async_trait;
use reqwest::StatusCode;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;
use tracing::{debug, instrument};

/// Errors that can occur when querying the storefront.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// HTTP request failed or the body did not decode.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("unexpected status {status} from {url}")]
    Status { status: StatusCode, url: String },

    /// No product (or stock record) with this id.
    #[error("product not found: {0}")]
    NotFound(ProductId),

    /// The service could not be reached at all.
    #[error("storefront unavailable: {0}")]
    Unavailable(String),
}

/// Inventory and catalog lookups.
#[async_trait]
pub trait StorefrontApi: Send + Sync {
    /// Current stock for `id`. Never cached.
    async fn stock(&self, id: ProductId) -> Result<Stock, StorefrontError>;

    /// Catalog entry for `id`.
    async fn product(&self, id: ProductId) -> Result<CatalogProduct, StorefrontError>;
}

/// `reqwest`-backed storefront client.
#[derive(Clone)]
pub struct HttpStorefront {
    client: reqwest::Client,
    base_url: String,
}

impl HttpStorefront {
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn new(base_url: impl Into<String>) -> Result<Self, StorefrontError> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn url(&self, resource: &str, id: ProductId) -> String {
        format!("{}/{}/{}", self.base_url, resource, id)
    }

    async fn get<T: serde::de::DeserializeOwned>(
        &self,
        resource: &str,
        id: ProductId,
    ) -> Result<T, StorefrontError> {
        let url = self.url(resource, id);
        debug!(%url, "Sending request");
        let response = self.client.get(&url).send().await?;

        match response.status() {
            status if status.is_success() => Ok(response.json::<T>().await?),
            StatusCode::NOT_FOUND => Err(StorefrontError::NotFound(id)),
            status => Err(StorefrontError::Status { status, url }),
        }
    }
}

#[async_trait]
impl StorefrontApi for HttpStorefront {
    #[instrument(skip(self))]
    async fn stock(&self, id: ProductId) -> Result<Stock, StorefrontError> {
        self.get("stock", id).await
    }

    #[instrument(skip(self))]
    async fn product(&self, id: ProductId) -> Result<CatalogProduct, StorefrontError> {
        self.get("products", id).await
    }
}

#[derive(Debug, Default)]
struct Inventory {
    products: HashMap<ProductId, CatalogProduct>,
    stock: HashMap<ProductId, u32>,
    offline: bool,
}

/// Storefront backed by in-memory maps. Clones share the same data, so a test can
/// change stock while the cart is running.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStorefront {
    inner: Arc<Mutex<Inventory>>,
}

impl InMemoryStorefront {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a catalog entry with `stock` units available.
    pub fn with_product(self, product: CatalogProduct, stock: u32) -> Self {
        if let Ok(mut inventory) = self.inner.lock() {
            inventory.stock.insert(product.id, stock);
            inventory.products.insert(product.id, product);
        }
        self
    }

    pub fn set_stock(&self, id: impl Into<ProductId>, amount: u32) {
        if let Ok(mut inventory) = self.inner.lock() {
            inventory.stock.insert(id.into(), amount);
        }
    }

    /// While offline every lookup fails with [`StorefrontError::Unavailable`].
    pub fn set_offline(&self, offline: bool) {
        if let Ok(mut inventory) = self.inner.lock() {
            inventory.offline = offline;
        }
    }

    fn read<T>(
        &self,
        id: ProductId,
        pick: impl FnOnce(&Inventory) -> Option<T>,
    ) -> Result<T, StorefrontError> {
        let inventory = self
            .inner
            .lock()
            .map_err(|_| StorefrontError::Unavailable("inventory lock poisoned".into()))?;
        if inventory.offline {
            return Err(StorefrontError::Unavailable("offline".into()));
        }
        pick(&*inventory).ok_or(StorefrontError::NotFound(id))
    }
}

#[async_trait]
impl StorefrontApi for InMemoryStorefront {
    async fn stock(&self, id: ProductId) -> Result<Stock, StorefrontError> {
        self.read(id, |inv| {
            inv.stock.get(&id).map(|&amount| Stock { amount })
        })
    }

    async fn product(&self, id: ProductId) -> Result<CatalogProduct, StorefrontError> {
        self.read(id, |inv| inv.products.get(&id).cloned())
    }
}
