use chrono::Utc;

use crate::models::transaction::Transaction;

/// Issues time-derived transaction ids.
///
/// Ids are Unix milliseconds as decimal strings. Two ids issued within the
/// same millisecond get consecutive values so a single writer never repeats
/// itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdGenerator {
    last: i64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed from existing transactions so new ids sort after every stored one.
    pub fn seeded_from(transactions: &[Transaction]) -> Self {
        let last = transactions
            .iter()
            .filter_map(|t| t.id.parse::<i64>().ok())
            .max()
            .unwrap_or(0);
        Self { last }
    }

    pub fn next_id(&mut self) -> String {
        self.next_at(Utc::now().timestamp_millis())
    }

    fn next_at(&mut self, now_millis: i64) -> String {
        self.last = now_millis.max(self.last + 1);
        self.last.to_string()
    }
}
