use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::contracts::types::ValidationIssue;

/// One income or expense record. This is the sole persisted entity; the
/// durable file is a JSON array of these, field for field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub title: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        }
    }

    /// Capitalized form used by the list view and both export formats.
    pub fn label(self) -> &'static str {
        match self {
            TransactionKind::Income => "Income",
            TransactionKind::Expense => "Expense",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "income" => Some(TransactionKind::Income),
            "expense" => Some(TransactionKind::Expense),
            _ => None,
        }
    }
}

impl Transaction {
    /// Checks the record invariants: non-empty id, non-empty title, and a
    /// finite positive amount. Returns every violation so the caller can
    /// surface them all at once.
    pub fn validate(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();

        if self.id.trim().is_empty() {
            issues.push(ValidationIssue {
                field: "id".to_string(),
                code: "missing_id".to_string(),
                description: "Transaction id must not be empty.".to_string(),
            });
        }

        if self.title.trim().is_empty() {
            issues.push(ValidationIssue {
                field: "title".to_string(),
                code: "missing_title".to_string(),
                description: "Transaction description must not be empty.".to_string(),
            });
        }

        if !self.amount.is_finite() {
            issues.push(ValidationIssue {
                field: "amount".to_string(),
                code: "amount_not_a_number".to_string(),
                description: "Amount must be a finite number.".to_string(),
            });
        } else if self.amount <= 0.0 {
            issues.push(ValidationIssue {
                field: "amount".to_string(),
                code: "amount_not_positive".to_string(),
                description: "Amount must be greater than zero.".to_string(),
            });
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{Transaction, TransactionKind};

    fn transaction(id: &str, title: &str, amount: f64) -> Transaction {
        Transaction {
            id: id.to_string(),
            title: title.to_string(),
            amount,
            kind: TransactionKind::Income,
            date: NaiveDate::from_ymd_opt(2025, 1, 5).unwrap_or_default(),
        }
    }

    #[test]
    fn valid_transaction_has_no_issues() {
        let issues = transaction("txn_1", "Salary", 150_000.0).validate();
        assert!(issues.is_empty());
    }

    #[test]
    fn empty_title_is_rejected() {
        let issues = transaction("txn_1", "", 100.0).validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, "title");
    }

    #[test]
    fn whitespace_title_is_rejected() {
        let issues = transaction("txn_1", "   ", 100.0).validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].code, "missing_title");
    }

    #[test]
    fn non_positive_amounts_are_rejected() {
        for amount in [0.0, -42.15] {
            let issues = transaction("txn_1", "Rent", amount).validate();
            assert_eq!(issues.len(), 1);
            assert_eq!(issues[0].code, "amount_not_positive");
        }
    }

    #[test]
    fn non_finite_amount_is_rejected() {
        let issues = transaction("txn_1", "Rent", f64::NAN).validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].code, "amount_not_a_number");
    }

    #[test]
    fn multiple_violations_are_all_reported() {
        let issues = transaction("", "", 0.0).validate();
        assert_eq!(issues.len(), 3);
    }

    #[test]
    fn kind_round_trips_through_lowercase_names() {
        assert_eq!(
            TransactionKind::parse("income"),
            Some(TransactionKind::Income)
        );
        assert_eq!(
            TransactionKind::parse("expense"),
            Some(TransactionKind::Expense)
        );
        assert_eq!(TransactionKind::parse("transfer"), None);
        assert_eq!(TransactionKind::Income.as_str(), "income");
        assert_eq!(TransactionKind::Expense.label(), "Expense");
    }

    #[test]
    fn serde_uses_the_durable_field_names() {
        let record = transaction("txn_1", "Salary", 150_000.0);
        let encoded = serde_json::to_value(&record);
        assert!(encoded.is_ok());
        if let Ok(value) = encoded {
            assert_eq!(value["type"], "income");
            assert_eq!(value["date"], "2025-01-05");
            assert_eq!(value["title"], "Salary");
        }
    }
}
