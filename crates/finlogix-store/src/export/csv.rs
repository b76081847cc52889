use csv::{QuoteStyle, WriterBuilder};

use crate::model::Transaction;
use crate::{StoreError, StoreResult};

use super::{REPORT_COLUMNS, report_row};

/// Renders the delimited text export: header row first, every field
/// quoted, one row per transaction in sequence order.
pub fn render_csv(transactions: &[Transaction]) -> StoreResult<Vec<u8>> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(Vec::new());

    writer
        .write_record(REPORT_COLUMNS)
        .map_err(|error| StoreError::internal_render_error(&error.to_string()))?;

    for transaction in transactions {
        writer
            .write_record(report_row(transaction))
            .map_err(|error| StoreError::internal_render_error(&error.to_string()))?;
    }

    writer
        .into_inner()
        .map_err(|error| StoreError::internal_render_error(&error.to_string()))
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::model::{Transaction, TransactionKind};

    use super::render_csv;

    fn transaction(title: &str, amount: f64, kind: TransactionKind, day: u32) -> Transaction {
        Transaction {
            id: format!("txn_{day}"),
            title: title.to_string(),
            amount,
            kind,
            date: NaiveDate::from_ymd_opt(2025, 1, day).unwrap_or_default(),
        }
    }

    #[test]
    fn empty_snapshot_exports_just_the_header() {
        let rendered = render_csv(&[]);
        assert!(rendered.is_ok());
        if let Ok(bytes) = rendered {
            let text = String::from_utf8_lossy(&bytes).to_string();
            assert_eq!(text, "\"Date\",\"Description\",\"Type\",\"Amount (₦)\"\n");
        }
    }

    #[test]
    fn salary_and_rent_export_matches_the_list_view_formatting() {
        let snapshot = vec![
            transaction("Salary", 150_000.0, TransactionKind::Income, 5),
            transaction("Rent", 45_000.0, TransactionKind::Expense, 6),
        ];

        let rendered = render_csv(&snapshot);
        assert!(rendered.is_ok());
        if let Ok(bytes) = rendered {
            let text = String::from_utf8_lossy(&bytes).to_string();
            let lines: Vec<&str> = text.lines().collect();
            assert_eq!(lines.len(), 3);
            assert_eq!(lines[0], "\"Date\",\"Description\",\"Type\",\"Amount (₦)\"");
            assert_eq!(
                lines[1],
                "\"January-5-2025\",\"Salary\",\"Income\",\"₦150,000.00\""
            );
            assert_eq!(
                lines[2],
                "\"January-6-2025\",\"Rent\",\"Expense\",\"₦45,000.00\""
            );
        }
    }

    #[test]
    fn titles_with_embedded_quotes_stay_parseable() {
        let snapshot = vec![transaction(
            "Repairs \"urgent\"",
            2_000.0,
            TransactionKind::Expense,
            7,
        )];

        let rendered = render_csv(&snapshot);
        assert!(rendered.is_ok());
        if let Ok(bytes) = rendered {
            let text = String::from_utf8_lossy(&bytes).to_string();
            assert!(text.contains("\"Repairs \"\"urgent\"\"\""));
        }
    }
}
