use std::{fmt, str::FromStr};

use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
    widgets::ListItem,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TransactionType {
    #[default]
    Income,
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "Income",
            TransactionType::Expense => "Expense",
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            TransactionType::Income => TransactionType::Expense,
            TransactionType::Expense => TransactionType::Income,
        }
    }

    pub fn color(&self) -> Color {
        match self {
            TransactionType::Income => Color::Green,
            TransactionType::Expense => Color::Red,
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown transaction type '{0}', expected 'income' or 'expense'")]
pub struct ParseTransactionTypeError(String);

impl FromStr for TransactionType {
    type Err = ParseTransactionTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(TransactionType::Income),
            "expense" => Ok(TransactionType::Expense),
            _ => Err(ParseTransactionTypeError(s.to_string())),
        }
    }
}

/// A single recorded income or expense entry.
///
/// Serialized as `{"id", "type", "category", "amount"}` with the amount as a
/// JSON number written digit for digit, so reloading never rounds it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub category: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub amount: Decimal,
}

impl Transaction {
    pub fn to_list_item(&self) -> ListItem {
        let type_style = Style::default().fg(self.transaction_type.color());

        ListItem::new(Line::from(vec![
            Span::styled(format!("{:<10} ", self.transaction_type), type_style),
            Span::raw(format!("{:<20} ", self.category)),
            Span::raw(format!("{:>12}", format_money(self.amount))),
        ]))
    }
}

/// Renders an amount as dollars with two decimals, e.g. `$12.50`.
pub fn format_money(amount: Decimal) -> String {
    if amount < Decimal::ZERO {
        format!("-${:.2}", amount.abs())
    } else {
        format!("${:.2}", amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(value: &str) -> Decimal {
        value.parse().unwrap()
    }

    #[test]
    fn parses_type_case_insensitively() {
        assert_eq!("Income".parse::<TransactionType>().unwrap(), TransactionType::Income);
        assert_eq!(" expense ".parse::<TransactionType>().unwrap(), TransactionType::Expense);
        assert!("transfer".parse::<TransactionType>().is_err());
    }

    #[test]
    fn serializes_with_original_field_names() {
        let transaction = Transaction {
            id: "1700000000000".to_string(),
            transaction_type: TransactionType::Expense,
            category: "Rent".to_string(),
            amount: dec("400.5"),
        };

        let json: serde_json::Value = serde_json::to_value(&transaction).unwrap();

        assert_eq!(json["id"], "1700000000000");
        assert_eq!(json["type"], "Expense");
        assert_eq!(json["category"], "Rent");
        assert_eq!(json["amount"].to_string(), "400.5");
    }

    #[test]
    fn long_amounts_are_written_exactly() {
        let transaction = Transaction {
            id: "1".to_string(),
            transaction_type: TransactionType::Income,
            category: "Investments".to_string(),
            amount: dec("12345678901234567.89"),
        };

        let blob = serde_json::to_string(&transaction).unwrap();
        let reloaded: Transaction = serde_json::from_str(&blob).unwrap();

        assert!(blob.contains(r#""amount":12345678901234567.89"#), "{blob}");
        assert_eq!(reloaded.amount.to_string(), "12345678901234567.89");
        assert_eq!(reloaded, transaction);
    }

    #[test]
    fn reads_integer_amounts() {
        let transaction: Transaction = serde_json::from_str(
            r#"{"id":"1","type":"Income","category":"Salary","amount":1000}"#,
        )
        .unwrap();

        assert_eq!(transaction.amount, dec("1000"));
        assert_eq!(transaction.transaction_type, TransactionType::Income);
    }

    #[test]
    fn formats_money_with_two_decimals() {
        assert_eq!(format_money(dec("1000")), "$1000.00");
        assert_eq!(format_money(dec("12.5")), "$12.50");
        assert_eq!(format_money(dec("-600")), "-$600.00");
    }
}
