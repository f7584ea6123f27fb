pub mod error;
pub mod export;
pub mod ledger;
pub mod logging;
pub mod models;
pub mod storage;
pub mod ui;

// Re-export commonly used items
pub use error::LedgerError;
pub use ledger::{Ledger, Totals};
pub use models::category::CategoryType;
pub use models::transaction::{Transaction, TransactionType};
pub use storage::{BlobStore, MemoryStore, STORAGE_KEY, SqliteStore};
pub use ui::App;
