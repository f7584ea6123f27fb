//! Key-value blob storage the ledger persists into.

mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;

/// The key the transaction sequence is stored under.
pub const STORAGE_KEY: &str = "transactions";

/// A persistent store of string blobs keyed by string.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Fetch the blob stored under `key`, or `None` if nothing was stored.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous blob.
    async fn set(&self, key: &str, value: String) -> Result<()>;
}

#[async_trait]
impl<T: BlobStore + ?Sized> BlobStore for Arc<T> {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key).await
    }

    async fn set(&self, key: &str, value: String) -> Result<()> {
        (**self).set(key, value).await
    }
}
