use std::path::Path;

use chrono::NaiveDate;
use ulid::Ulid;

use crate::StoreResult;
use crate::TransactionStore;
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::AddData;
use crate::model::{Transaction, TransactionKind};

use super::collect_warnings;

#[derive(Debug, Clone)]
pub struct AddInput {
    pub title: String,
    pub amount: f64,
    pub kind: TransactionKind,
    pub date: NaiveDate,
    /// Explicit id, mainly for tests. Normal adds get a fresh ULID.
    pub id: Option<String>,
}

pub fn run(input: AddInput) -> StoreResult<SuccessEnvelope> {
    run_with_home_override(input, None)
}

#[doc(hidden)]
pub fn run_with_home_override(
    input: AddInput,
    home_override: Option<&Path>,
) -> StoreResult<SuccessEnvelope> {
    let mut store = TransactionStore::open_with(home_override)?;

    let transaction = Transaction {
        id: input.id.unwrap_or_else(|| format!("txn_{}", Ulid::new())),
        title: input.title,
        amount: input.amount,
        kind: input.kind,
        date: input.date,
    };

    let outcome = store.add(transaction.clone())?;
    let data = AddData {
        transaction,
        count: store.snapshot().len(),
        warnings: collect_warnings(&store, Some(&outcome)),
    };

    success("add", data)
}
