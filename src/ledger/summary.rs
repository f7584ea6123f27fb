use rust_decimal::Decimal;

use crate::error::{LedgerError, Result};
use crate::models::transaction::{Transaction, TransactionType};

/// Income, expense and balance over a transaction sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Totals {
    pub income: Decimal,
    pub expense: Decimal,
    pub balance: Decimal,
}

/// Sums every transaction by type. The balance is always `income - expense`.
///
/// Fails with [LedgerError::TotalsOverflow] when a sum leaves the range of
/// [Decimal].
pub fn calculate_totals(transactions: &[Transaction]) -> Result<Totals> {
    let mut income = Decimal::ZERO;
    let mut expense = Decimal::ZERO;

    for transaction in transactions {
        let total = match transaction.transaction_type {
            TransactionType::Income => &mut income,
            TransactionType::Expense => &mut expense,
        };
        *total = total
            .checked_add(transaction.amount)
            .ok_or(LedgerError::TotalsOverflow)?;
    }

    let balance = income
        .checked_sub(expense)
        .ok_or(LedgerError::TotalsOverflow)?;

    Ok(Totals {
        income,
        expense,
        balance,
    })
}
