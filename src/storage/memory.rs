use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::BlobStore;
use crate::error::Result;

/// Blob store that lives only as long as the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    blobs: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `value` under `key`.
    pub fn with_blob(key: &str, value: &str) -> Self {
        let mut blobs = HashMap::new();
        blobs.insert(key.to_string(), value.to_string());
        Self {
            blobs: Mutex::new(blobs),
        }
    }
}

#[async_trait]
impl BlobStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.blobs.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<()> {
        self.blobs.lock().await.insert(key.to_string(), value);
        Ok(())
    }
}
