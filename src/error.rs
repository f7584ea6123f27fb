use thiserror::Error;

/// Errors produced by the ledger and its storage.
///
/// Only [LedgerError::MissingFields] and [LedgerError::InvalidAmount] are
/// validation failures meant to be shown to the user. The rest are storage
/// faults that propagate to the caller.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Please fill all fields")]
    MissingFields,

    #[error("'{0}' is not a valid amount")]
    InvalidAmount(String),

    #[error("totals exceed the largest representable amount")]
    TotalsOverflow,

    #[error("stored transactions could not be parsed: {0}")]
    MalformedBlob(#[from] serde_json::Error),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("storage error: {0}")]
    Storage(String),
}

impl LedgerError {
    /// Whether the error came from validating user input.
    pub fn is_validation(&self) -> bool {
        matches!(self, LedgerError::MissingFields | LedgerError::InvalidAmount(_))
    }
}

pub type Result<T> = std::result::Result<T, LedgerError>;
