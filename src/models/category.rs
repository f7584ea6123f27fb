use super::transaction::TransactionType;

/// Suggested categories offered by the entry form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryType {
    Salary,
    Freelance,
    Investments,
    SideHustle,
    Groceries,
    Rent,
    Utilities,
    Transport,
}

impl CategoryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryType::Salary => "Salary",
            CategoryType::Freelance => "Freelance",
            CategoryType::Investments => "Investments",
            CategoryType::SideHustle => "Side Hustle",
            CategoryType::Groceries => "Groceries",
            CategoryType::Rent => "Rent",
            CategoryType::Utilities => "Utilities",
            CategoryType::Transport => "Transport",
        }
    }

    pub fn transaction_type(&self) -> TransactionType {
        match self {
            CategoryType::Salary
            | CategoryType::Freelance
            | CategoryType::Investments
            | CategoryType::SideHustle => TransactionType::Income,
            CategoryType::Groceries
            | CategoryType::Rent
            | CategoryType::Utilities
            | CategoryType::Transport => TransactionType::Expense,
        }
    }

    pub fn all() -> Vec<CategoryType> {
        vec![
            CategoryType::Salary,
            CategoryType::Freelance,
            CategoryType::Investments,
            CategoryType::SideHustle,
            CategoryType::Groceries,
            CategoryType::Rent,
            CategoryType::Utilities,
            CategoryType::Transport,
        ]
    }

    /// The categories the form offers for `transaction_type`, in display order.
    pub fn for_type(transaction_type: TransactionType) -> Vec<CategoryType> {
        Self::all()
            .into_iter()
            .filter(|c| c.transaction_type() == transaction_type)
            .collect()
    }
}

/// Steps through the suggested categories for `transaction_type`.
///
/// Starting from an empty or unknown `current`, moving forward selects the
/// first suggestion and moving backward the last. Wraps at both ends.
pub fn cycle_category(transaction_type: TransactionType, current: &str, forward: bool) -> &'static str {
    let options = CategoryType::for_type(transaction_type);
    let position = options.iter().position(|c| c.as_str() == current);

    let next = match (position, forward) {
        (None, true) => 0,
        (None, false) => options.len() - 1,
        (Some(i), true) => (i + 1) % options.len(),
        (Some(i), false) => (i + options.len() - 1) % options.len(),
    };

    options[next].as_str()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_suggestions_by_type() {
        let income: Vec<_> = CategoryType::for_type(TransactionType::Income)
            .iter()
            .map(|c| c.as_str())
            .collect();
        let expense: Vec<_> = CategoryType::for_type(TransactionType::Expense)
            .iter()
            .map(|c| c.as_str())
            .collect();

        assert_eq!(income, ["Salary", "Freelance", "Investments", "Side Hustle"]);
        assert_eq!(expense, ["Groceries", "Rent", "Utilities", "Transport"]);
    }

    #[test]
    fn cycles_and_wraps() {
        assert_eq!(cycle_category(TransactionType::Income, "", true), "Salary");
        assert_eq!(cycle_category(TransactionType::Income, "", false), "Side Hustle");
        assert_eq!(cycle_category(TransactionType::Income, "Salary", true), "Freelance");
        assert_eq!(cycle_category(TransactionType::Expense, "Transport", true), "Groceries");
        assert_eq!(cycle_category(TransactionType::Expense, "Groceries", false), "Transport");
    }

    #[test]
    fn unknown_category_restarts_the_cycle() {
        assert_eq!(cycle_category(TransactionType::Expense, "Salary", true), "Groceries");
    }
}
