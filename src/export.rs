use std::{fs::File, io::Write, path::Path};

use anyhow::{Context, Result};
use csv::WriterBuilder;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::transaction::{Transaction, TransactionType};

#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    id: &'a str,
    #[serde(rename = "type")]
    transaction_type: TransactionType,
    category: &'a str,
    amount: Decimal,
}

impl<'a> From<&'a Transaction> for CsvRow<'a> {
    fn from(transaction: &'a Transaction) -> Self {
        CsvRow {
            id: &transaction.id,
            transaction_type: transaction.transaction_type,
            category: &transaction.category,
            amount: transaction.amount,
        }
    }
}

/// Write `transactions` as CSV with an `id,type,category,amount` header.
pub fn write_transactions_csv<W: Write>(writer: W, transactions: &[Transaction]) -> Result<()> {
    let mut csv = WriterBuilder::new().has_headers(true).from_writer(writer);

    for transaction in transactions {
        csv.serialize(CsvRow::from(transaction))
            .with_context(|| format!("Failed to write transaction {}", transaction.id))?;
    }

    csv.flush().context("Failed to flush CSV output")?;
    Ok(())
}

pub fn export_transactions_to_csv<P: AsRef<Path>>(path: P, transactions: &[Transaction]) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)
        .with_context(|| format!("Failed to create CSV file {}", path.display()))?;
    write_transactions_csv(file, transactions)?;
    tracing::info!("Exported {} transactions to {}", transactions.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_header_and_one_row_per_transaction() {
        let transactions = vec![
            Transaction {
                id: "1".to_string(),
                transaction_type: TransactionType::Income,
                category: "Side Hustle".to_string(),
                amount: "1000".parse().unwrap(),
            },
            Transaction {
                id: "2".to_string(),
                transaction_type: TransactionType::Expense,
                category: "Rent".to_string(),
                amount: "400.50".parse().unwrap(),
            },
        ];
        let mut out = Vec::new();

        write_transactions_csv(&mut out, &transactions).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(
            lines,
            [
                "id,type,category,amount",
                "1,Income,Side Hustle,1000",
                "2,Expense,Rent,400.50",
            ]
        );
    }

    #[test]
    fn empty_sequence_writes_nothing() {
        let mut out = Vec::new();

        write_transactions_csv(&mut out, &[]).unwrap();

        assert!(out.is_empty());
    }
}
