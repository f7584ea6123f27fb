//! The ledger: recorded transactions, their totals and the entry form.

mod id;
pub mod state;
pub mod store;
pub mod summary;

pub use id::IdGenerator;
pub use state::{Action, Draft, Effect, LedgerState, Transition};
pub use store::TransactionStore;
pub use summary::{Totals, calculate_totals};

use crate::error::Result;
use crate::models::transaction::{Transaction, TransactionType};
use crate::storage::BlobStore;

/// Owns the current [LedgerState] and carries out the effects of each
/// transition against a [TransactionStore].
pub struct Ledger<S> {
    store: TransactionStore<S>,
    state: LedgerState,
    ids: IdGenerator,
}

impl<S: BlobStore> Ledger<S> {
    pub fn new(blobs: S) -> Self {
        Self {
            store: TransactionStore::new(blobs),
            state: LedgerState::default(),
            ids: IdGenerator::new(),
        }
    }

    /// Open a ledger and load whatever is already stored.
    pub async fn open(blobs: S) -> Result<Self> {
        let mut ledger = Self::new(blobs);
        ledger.load().await?;
        Ok(ledger)
    }

    pub fn state(&self) -> &LedgerState {
        &self.state
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.state.transactions
    }

    pub fn totals(&self) -> Totals {
        self.state.totals
    }

    pub fn draft(&self) -> &Draft {
        &self.state.draft
    }

    /// Replace the in-memory sequence with the stored one.
    pub async fn load(&mut self) -> Result<()> {
        let transactions = self.store.load().await?;
        self.ids = IdGenerator::seeded_from(&transactions);
        self.dispatch(Action::Loaded(transactions)).await
    }

    /// Apply `action` and run any effect it produces.
    ///
    /// On error the state is left as it was, except that a failed persist
    /// happens after the new state has been adopted.
    pub async fn dispatch(&mut self, action: Action) -> Result<()> {
        let transition = self.state.reduce(action)?;
        self.apply(transition).await
    }

    /// Record the current draft as a new transaction.
    pub async fn submit(&mut self) -> Result<Transaction> {
        let staged = self.state.clone();
        self.record(&staged).await
    }

    /// Record a transaction from explicit fields. The draft is only touched
    /// on success, where it is reset like after [Ledger::submit].
    pub async fn add(
        &mut self,
        transaction_type: TransactionType,
        category: &str,
        amount: &str,
    ) -> Result<Transaction> {
        let staged = LedgerState {
            draft: Draft::new(transaction_type, category, amount),
            ..self.state.clone()
        };
        self.record(&staged).await
    }

    /// Write the current sequence to storage.
    pub async fn persist(&self) -> Result<()> {
        self.store.persist(&self.state.transactions).await
    }

    async fn apply(&mut self, transition: Transition) -> Result<()> {
        self.state = transition.state;
        match transition.effect {
            Some(Effect::Persist) => self.persist().await,
            None => Ok(()),
        }
    }

    async fn record(&mut self, staged: &LedgerState) -> Result<Transaction> {
        let (category, amount) = staged
            .draft
            .validate()
            .inspect_err(|err| tracing::warn!("Rejected transaction: {err}"))?;

        let transaction = Transaction {
            id: self.ids.next_id(),
            transaction_type: staged.draft.transaction_type,
            category,
            amount,
        };
        let transition = staged
            .reduce(Action::Append(transaction.clone()))
            .inspect_err(|err| tracing::warn!("Rejected transaction: {err}"))?;

        tracing::info!(
            "Added {} '{}' {} (id {})",
            transaction.transaction_type,
            transaction.category,
            transaction.amount,
            transaction.id
        );

        self.apply(transition).await?;
        Ok(transaction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LedgerError;
    use crate::storage::MemoryStore;

    #[tokio::test]
    async fn rejected_submissions_do_not_consume_ids() {
        let mut ledger = Ledger::open(MemoryStore::new()).await.unwrap();
        ledger.add(TransactionType::Income, "Salary", "10").await.unwrap();
        let ids_before = ledger.ids.clone();

        let missing = ledger.add(TransactionType::Income, "", "10").await;
        let invalid = ledger.add(TransactionType::Income, "Salary", "ten").await;
        let empty_draft = ledger.submit().await;

        assert!(matches!(missing, Err(LedgerError::MissingFields)));
        assert!(matches!(invalid, Err(LedgerError::InvalidAmount(_))));
        assert!(matches!(empty_draft, Err(LedgerError::MissingFields)));
        assert_eq!(ledger.ids, ids_before);
    }

    #[tokio::test]
    async fn add_returns_the_stored_transaction() {
        let mut ledger = Ledger::open(MemoryStore::new()).await.unwrap();

        let added = ledger.add(TransactionType::Expense, " Rent ", "400").await.unwrap();

        assert_eq!(added.category, "Rent");
        assert_eq!(ledger.transactions(), [added].as_slice());
    }
}
