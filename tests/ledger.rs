use std::{collections::HashSet, sync::Arc};

use async_trait::async_trait;
use cashbook::{
    App, BlobStore, Ledger, LedgerError, MemoryStore, STORAGE_KEY, SqliteStore, Transaction,
    TransactionType, ledger::Action,
};
use rust_decimal::Decimal;

/// Reads nothing and refuses every write.
struct ReadOnlyStore;

#[async_trait]
impl BlobStore for ReadOnlyStore {
    async fn get(&self, _key: &str) -> cashbook::error::Result<Option<String>> {
        Ok(None)
    }

    async fn set(&self, _key: &str, _value: String) -> cashbook::error::Result<()> {
        Err(LedgerError::Storage("disk is read-only".to_string()))
    }
}

async fn stored(blobs: &MemoryStore) -> Vec<Transaction> {
    match blobs.get(STORAGE_KEY).await.unwrap() {
        Some(blob) => serde_json::from_str(&blob).unwrap(),
        None => Vec::new(),
    }
}

#[tokio::test]
async fn salary_then_rent_totals() {
    let mut ledger = Ledger::open(MemoryStore::new()).await.unwrap();

    ledger.add(TransactionType::Income, "Salary", "1000").await.unwrap();
    ledger.add(TransactionType::Expense, "Rent", "400").await.unwrap();

    let totals = ledger.totals();
    assert_eq!(totals.income, Decimal::from(1000));
    assert_eq!(totals.expense, Decimal::from(400));
    assert_eq!(totals.balance, Decimal::from(600));
}

#[tokio::test]
async fn empty_fields_leave_store_unchanged() {
    let blobs = Arc::new(MemoryStore::new());
    let mut ledger = Ledger::open(blobs.clone()).await.unwrap();
    ledger.add(TransactionType::Income, "Salary", "1000").await.unwrap();
    let before = stored(&blobs).await;

    let missing_amount = ledger.add(TransactionType::Expense, "Rent", "").await;
    let missing_category = ledger.add(TransactionType::Expense, "", "400").await;

    assert!(matches!(missing_amount, Err(LedgerError::MissingFields)));
    assert!(matches!(missing_category, Err(LedgerError::MissingFields)));
    assert_eq!(stored(&blobs).await, before);
    assert_eq!(ledger.transactions(), before.as_slice());
}

#[tokio::test]
async fn submitting_empty_draft_keeps_draft() {
    let mut ledger = Ledger::open(MemoryStore::new()).await.unwrap();
    ledger
        .dispatch(Action::SetAmount("25".to_string()))
        .await
        .unwrap();

    let result = ledger.submit().await;

    assert!(matches!(result, Err(LedgerError::MissingFields)));
    assert_eq!(ledger.draft().amount, "25");
    assert!(ledger.transactions().is_empty());
}

#[tokio::test]
async fn submit_uses_draft_and_resets_it() {
    let blobs = Arc::new(MemoryStore::new());
    let mut ledger = Ledger::open(blobs.clone()).await.unwrap();

    ledger
        .dispatch(Action::SelectType(TransactionType::Expense))
        .await
        .unwrap();
    ledger
        .dispatch(Action::SetCategory("Groceries".to_string()))
        .await
        .unwrap();
    ledger
        .dispatch(Action::SetAmount("42.10".to_string()))
        .await
        .unwrap();
    let added = ledger.submit().await.unwrap();

    assert_eq!(added.category, "Groceries");
    assert_eq!(added.transaction_type, TransactionType::Expense);
    assert_eq!(ledger.draft().category, "");
    assert_eq!(ledger.draft().amount, "");
    assert_eq!(ledger.draft().transaction_type, TransactionType::Expense);
    assert_eq!(stored(&blobs).await, vec![added]);
}

#[tokio::test]
async fn n_additions_have_distinct_ids() {
    let blobs = Arc::new(MemoryStore::new());
    let mut ledger = Ledger::open(blobs.clone()).await.unwrap();

    for i in 1..=50 {
        ledger
            .add(TransactionType::Expense, "Transport", &i.to_string())
            .await
            .unwrap();
    }

    let persisted = stored(&blobs).await;
    let ids: HashSet<_> = persisted.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(persisted.len(), 50);
    assert_eq!(ids.len(), 50);
}

#[tokio::test]
async fn reload_reproduces_sequence() {
    let blobs = Arc::new(SqliteStore::open_in_memory().unwrap());
    let mut ledger = Ledger::open(blobs.clone()).await.unwrap();
    ledger.add(TransactionType::Income, "Freelance", "250.75").await.unwrap();
    ledger.add(TransactionType::Expense, "Utilities", "80").await.unwrap();
    ledger.add(TransactionType::Income, "Side Hustle", "12.5").await.unwrap();

    let reopened = Ledger::open(blobs.clone()).await.unwrap();

    assert_eq!(reopened.transactions(), ledger.transactions());
    assert_eq!(reopened.totals(), ledger.totals());
}

#[tokio::test]
async fn ids_after_reload_do_not_collide() {
    let blobs = Arc::new(MemoryStore::new());
    let mut first = Ledger::open(blobs.clone()).await.unwrap();
    let earlier = first.add(TransactionType::Income, "Salary", "1").await.unwrap();

    let mut second = Ledger::open(blobs.clone()).await.unwrap();
    let later = second.add(TransactionType::Income, "Salary", "2").await.unwrap();

    assert!(later.id.parse::<i64>().unwrap() > earlier.id.parse::<i64>().unwrap());
}

#[tokio::test]
async fn malformed_blob_fails_to_open() {
    let blobs = MemoryStore::with_blob(STORAGE_KEY, "{\"oops\":");

    let result = Ledger::open(blobs).await;

    assert!(matches!(result, Err(LedgerError::MalformedBlob(_))));
}

#[tokio::test]
async fn adding_past_the_largest_amount_is_rejected() {
    let blobs = Arc::new(MemoryStore::new());
    let mut ledger = Ledger::open(blobs.clone()).await.unwrap();
    let max = Decimal::MAX.to_string();
    ledger.add(TransactionType::Income, "Salary", &max).await.unwrap();

    let result = ledger.add(TransactionType::Income, "Salary", &max).await;

    assert!(matches!(result, Err(LedgerError::InvalidAmount(_))));
    assert_eq!(ledger.transactions().len(), 1);
    assert_eq!(ledger.totals().income, Decimal::MAX);
    assert_eq!(stored(&blobs).await.len(), 1);
}

#[tokio::test]
async fn stored_amounts_summing_past_the_largest_amount_fail_to_open() {
    let max = Decimal::MAX.to_string();
    let blob = format!(
        r#"[{{"id":"1","type":"Income","category":"Salary","amount":{max}}},
            {{"id":"2","type":"Income","category":"Salary","amount":{max}}}]"#
    );

    let result = Ledger::open(MemoryStore::with_blob(STORAGE_KEY, &blob)).await;

    assert!(matches!(result, Err(LedgerError::TotalsOverflow)));
}

#[tokio::test]
async fn long_amounts_survive_a_reload() {
    let blobs = Arc::new(MemoryStore::new());
    let mut ledger = Ledger::open(blobs.clone()).await.unwrap();
    ledger
        .add(TransactionType::Income, "Investments", "12345678901234567.89")
        .await
        .unwrap();
    ledger.add(TransactionType::Expense, "Rent", "0.000000001").await.unwrap();

    let reopened = Ledger::open(blobs.clone()).await.unwrap();

    assert_eq!(reopened.transactions(), ledger.transactions());
    assert_eq!(reopened.transactions()[0].amount.to_string(), "12345678901234567.89");
    assert_eq!(reopened.totals(), ledger.totals());
}

#[tokio::test]
async fn failed_save_returns_error_after_adopting_the_new_state() {
    let mut ledger = Ledger::open(ReadOnlyStore).await.unwrap();

    let result = ledger.add(TransactionType::Expense, "Groceries", "12.50").await;

    assert!(matches!(result, Err(LedgerError::Storage(_))));
    assert_eq!(ledger.transactions().len(), 1);
    assert_eq!(ledger.transactions()[0].category, "Groceries");
    assert_eq!(ledger.totals().expense, "12.50".parse::<Decimal>().unwrap());
    assert_eq!(ledger.draft().amount, "");
}

#[tokio::test]
async fn screen_reports_failed_save_instead_of_alerting() {
    let mut ledger = Ledger::open(ReadOnlyStore).await.unwrap();
    for action in [
        Action::SetCategory("Salary".to_string()),
        Action::SetAmount("1000".to_string()),
    ] {
        ledger.dispatch(action).await.unwrap();
    }
    let mut app = App::new(ledger);

    let result = app.submit().await;

    assert!(matches!(result, Err(LedgerError::Storage(_))));
    assert!(app.alert.is_none());
}
