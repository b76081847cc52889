mod csv;
mod pdf;

use chrono::NaiveDate;

pub use csv::render_csv;
pub use pdf::render_pdf;

use crate::format::{format_naira, long_date};
use crate::model::Transaction;

/// Fixed title header on the tabular document export.
pub const REPORT_TITLE: &str = "FinLogix Transaction Report";

/// Column headers shared by both export formats.
pub const REPORT_COLUMNS: [&str; 4] = ["Date", "Description", "Type", "Amount (₦)"];

const FILE_NAME_PREFIX: &str = "FinLogix_Report";

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ExportFormat {
    Csv,
    Pdf,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Pdf => "pdf",
        }
    }

    pub fn as_str(self) -> &'static str {
        self.extension()
    }
}

/// Artifact name: fixed prefix plus the supplied date in ISO form.
pub fn report_file_name(format: ExportFormat, today: NaiveDate) -> String {
    format!(
        "{FILE_NAME_PREFIX}_{}.{}",
        today.format("%Y-%m-%d"),
        format.extension()
    )
}

/// Applies the shared per-field formatting rules to one transaction, in
/// report column order. Both exporters and tests go through this so the
/// document always matches what the list view shows.
pub fn report_row(transaction: &Transaction) -> [String; 4] {
    [
        long_date(transaction.date),
        transaction.title.clone(),
        transaction.kind.label().to_string(),
        format_naira(transaction.amount),
    ]
}
