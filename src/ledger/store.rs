use crate::error::{LedgerError, Result};
use crate::models::transaction::Transaction;
use crate::storage::{BlobStore, STORAGE_KEY};

/// Reads and writes the whole transaction sequence as one JSON blob.
#[derive(Debug)]
pub struct TransactionStore<S> {
    blobs: S,
    key: &'static str,
}

impl<S: BlobStore> TransactionStore<S> {
    pub fn new(blobs: S) -> Self {
        Self {
            blobs,
            key: STORAGE_KEY,
        }
    }

    /// Read the stored sequence. A missing blob is an empty sequence.
    pub async fn load(&self) -> Result<Vec<Transaction>> {
        match self.blobs.get(self.key).await? {
            Some(blob) => {
                let transactions: Vec<Transaction> = serde_json::from_str(&blob)?;
                tracing::debug!("Loaded {} transactions", transactions.len());
                Ok(transactions)
            }
            None => {
                tracing::debug!("No stored transactions under '{}'", self.key);
                Ok(Vec::new())
            }
        }
    }

    /// Overwrite the stored blob with `transactions`.
    pub async fn persist(&self, transactions: &[Transaction]) -> Result<()> {
        let blob = serde_json::to_string(transactions)
            .map_err(|e| LedgerError::Storage(format!("failed to serialize transactions: {e}")))?;
        self.blobs.set(self.key, blob).await?;
        tracing::debug!("Persisted {} transactions", transactions.len());
        Ok(())
    }
}
