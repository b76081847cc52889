use serde::Serialize;

use crate::model::{Transaction, TransactionKind};

/// Derived totals over one snapshot. Recomputed on every query; never
/// cached or persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Totals {
    pub total_income: f64,
    pub total_expense: f64,
    pub balance: f64,
}

pub fn summarize(transactions: &[Transaction]) -> Totals {
    let total_income = sum_of_kind(transactions, TransactionKind::Income);
    let total_expense = sum_of_kind(transactions, TransactionKind::Expense);

    Totals {
        total_income,
        total_expense,
        balance: total_income - total_expense,
    }
}

fn sum_of_kind(transactions: &[Transaction], kind: TransactionKind) -> f64 {
    transactions
        .iter()
        .filter(|transaction| transaction.kind == kind)
        .map(|transaction| transaction.amount)
        .sum()
}
