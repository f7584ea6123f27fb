//! Immutable ledger state and the update function that drives it.

use rust_decimal::Decimal;

use super::summary::{Totals, calculate_totals};
use crate::error::{LedgerError, Result};
use crate::models::transaction::{Transaction, TransactionType};

/// The unsubmitted entry form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Draft {
    pub transaction_type: TransactionType,
    pub category: String,
    pub amount: String,
}

impl Draft {
    pub fn new(transaction_type: TransactionType, category: &str, amount: &str) -> Self {
        Self {
            transaction_type,
            category: category.to_string(),
            amount: amount.to_string(),
        }
    }

    /// Check the draft and return its trimmed category and parsed amount.
    pub fn validate(&self) -> Result<(String, Decimal)> {
        let category = self.category.trim();
        let amount = self.amount.trim();

        if category.is_empty() || amount.is_empty() {
            return Err(LedgerError::MissingFields);
        }

        let parsed = amount
            .parse::<Decimal>()
            .map_err(|_| LedgerError::InvalidAmount(amount.to_string()))?;
        if parsed <= Decimal::ZERO {
            return Err(LedgerError::InvalidAmount(amount.to_string()));
        }

        Ok((category.to_string(), parsed))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Replace the sequence with one read from storage.
    Loaded(Vec<Transaction>),
    SelectType(TransactionType),
    SetCategory(String),
    SetAmount(String),
    /// Record the draft as a new transaction with the given id.
    Submit { id: String },
    /// Record an already validated transaction and reset the draft.
    Append(Transaction),
}

/// Side effects the owner of the state has to carry out after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Write the full transaction sequence back to storage.
    Persist,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: LedgerState,
    pub effect: Option<Effect>,
}

impl Transition {
    fn quiet(state: LedgerState) -> Self {
        Self {
            state,
            effect: None,
        }
    }
}

/// Everything the screen shows: the recorded sequence, its totals and the
/// form being filled in. Totals always match the sequence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LedgerState {
    pub transactions: Vec<Transaction>,
    pub totals: Totals,
    pub draft: Draft,
}

impl LedgerState {
    /// Compute the state that follows `action`.
    ///
    /// Validation failures return an error and leave `self` as the current
    /// state.
    pub fn reduce(&self, action: Action) -> Result<Transition> {
        match action {
            Action::Loaded(transactions) => {
                let totals = calculate_totals(&transactions)?;
                Ok(Transition::quiet(LedgerState {
                    transactions,
                    totals,
                    draft: self.draft.clone(),
                }))
            }
            Action::SelectType(transaction_type) => {
                let mut draft = self.draft.clone();
                if draft.transaction_type != transaction_type {
                    draft.transaction_type = transaction_type;
                    draft.category.clear();
                }
                Ok(Transition::quiet(self.with_draft(draft)))
            }
            Action::SetCategory(category) => {
                let draft = Draft {
                    category,
                    ..self.draft.clone()
                };
                Ok(Transition::quiet(self.with_draft(draft)))
            }
            Action::SetAmount(amount) => {
                let draft = Draft {
                    amount,
                    ..self.draft.clone()
                };
                Ok(Transition::quiet(self.with_draft(draft)))
            }
            Action::Submit { id } => {
                let (category, amount) = self.draft.validate()?;
                self.append(Transaction {
                    id,
                    transaction_type: self.draft.transaction_type,
                    category,
                    amount,
                })
            }
            Action::Append(transaction) => self.append(transaction),
        }
    }

    /// Appending an amount that would push the totals out of range is
    /// rejected like any other unusable amount.
    fn append(&self, transaction: Transaction) -> Result<Transition> {
        let amount = transaction.amount;
        let mut transactions = self.transactions.clone();
        transactions.push(transaction);
        let totals = calculate_totals(&transactions).map_err(|err| match err {
            LedgerError::TotalsOverflow => LedgerError::InvalidAmount(amount.to_string()),
            other => other,
        })?;

        Ok(Transition {
            state: LedgerState {
                transactions,
                totals,
                draft: Draft {
                    transaction_type: self.draft.transaction_type,
                    ..Draft::default()
                },
            },
            effect: Some(Effect::Persist),
        })
    }

    fn with_draft(&self, draft: Draft) -> LedgerState {
        LedgerState {
            transactions: self.transactions.clone(),
            totals: self.totals,
            draft,
        }
    }
}
