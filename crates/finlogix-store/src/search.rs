use crate::model::Transaction;

/// Case-insensitive substring match over transaction titles. An empty
/// query returns the full sequence; original order is always preserved.
pub fn filter_by_title(transactions: &[Transaction], query: &str) -> Vec<Transaction> {
    if query.is_empty() {
        return transactions.to_vec();
    }

    let needle = query.to_lowercase();
    transactions
        .iter()
        .filter(|transaction| transaction.title.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::model::{Transaction, TransactionKind};

    use super::filter_by_title;

    fn transaction(id: &str, title: &str) -> Transaction {
        Transaction {
            id: id.to_string(),
            title: title.to_string(),
            amount: 10.0,
            kind: TransactionKind::Expense,
            date: NaiveDate::from_ymd_opt(2025, 1, 6).unwrap_or_default(),
        }
    }

    fn sample() -> Vec<Transaction> {
        vec![
            transaction("txn_1", "Monthly salary"),
            transaction("txn_2", "Rent"),
            transaction("txn_3", "Salary advance"),
        ]
    }

    #[test]
    fn empty_query_returns_the_full_sequence() {
        let snapshot = sample();
        let filtered = filter_by_title(&snapshot, "");
        assert_eq!(filtered, snapshot);
    }

    #[test]
    fn match_is_case_insensitive() {
        let filtered = filter_by_title(&sample(), "SALARY");
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].id, "txn_1");
        assert_eq!(filtered[1].id, "txn_3");
    }

    #[test]
    fn result_preserves_relative_order() {
        let filtered = filter_by_title(&sample(), "a");
        let ids: Vec<&str> = filtered.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["txn_1", "txn_3"]);
    }

    #[test]
    fn no_match_yields_empty_result() {
        let filtered = filter_by_title(&sample(), "groceries");
        assert!(filtered.is_empty());
    }

    #[test]
    fn filtering_is_idempotent() {
        let once = filter_by_title(&sample(), "salary");
        let twice = filter_by_title(&once, "salary");
        assert_eq!(once, twice);
    }
}
