//! String-keyed persistence for the cart.
//!
//! The cart is stored as one JSON document under one key, the way a browser keeps it in
//! local storage. [`MemoryStore`] lives for the process; [`FileStore`] keeps every key in a
//! single JSON object on disk.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use async_trait::async_trait;
use thiserror::Error;

/// Key under which the storefront keeps its cart.
pub const CART_KEY: &str = "@RocketShoes:cart";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage file is not a JSON object of strings: {0}")]
    Json(#[from] serde_json::Error),

    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// A string-keyed, string-valued store.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrites the value stored under `key`.
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}
