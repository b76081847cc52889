use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use finlogix_store::export::ExportFormat;
use finlogix_store::model::TransactionKind;

pub fn parse_iso_date(value: &str) -> Result<NaiveDate, String> {
    if value.len() != 10 {
        return Err("date must use YYYY-MM-DD format".to_string());
    }

    let bytes = value.as_bytes();
    if bytes[4] != b'-' || bytes[7] != b'-' {
        return Err("date must use YYYY-MM-DD format".to_string());
    }

    for index in [0usize, 1, 2, 3, 5, 6, 8, 9] {
        if !bytes[index].is_ascii_digit() {
            return Err("date must use YYYY-MM-DD format".to_string());
        }
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| "date must use valid calendar values".to_string())
}

pub fn parse_transaction_kind(value: &str) -> Result<TransactionKind, String> {
    TransactionKind::parse(value).ok_or_else(|| "type must be one of: income, expense".to_string())
}

pub fn parse_export_format(value: &str) -> Result<ExportFormat, String> {
    match value {
        "csv" => Ok(ExportFormat::Csv),
        "pdf" => Ok(ExportFormat::Pdf),
        _ => Err("format must be one of: csv, pdf".to_string()),
    }
}

/// Extended help shown after `finlogix add --help`.
pub const ADD_AFTER_HELP: &str = "\
Field rules (all four fields are required):
  --title <text>
    Free-text description of the transaction.
    Example: `--title \"Monthly salary\"`

  --amount <number>
    Positive amount in naira. No currency symbol, no thousands separators.
    Example: `--amount 150000`

  --type <income|expense>
    Exactly one of the two kinds; there is no other variant.

  --date <YYYY-MM-DD>
    Calendar date of the transaction, date only.
    Example: `--date 2025-01-05`

A rejected add changes nothing: fix the reported fields and rerun.
There is no edit command. To correct a recorded transaction, run
`finlogix remove <id>` and add it again.
";

#[derive(Debug, Parser)]
#[command(
    name = "finlogix",
    version,
    about = "personal finance tracker",
    disable_help_subcommand = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Record a new income or expense transaction
    #[command(after_long_help = ADD_AFTER_HELP)]
    Add {
        /// Free-text description (e.g. "Monthly salary")
        #[arg(long)]
        title: String,
        /// Positive amount in naira
        #[arg(long)]
        amount: f64,
        /// Transaction kind: income or expense
        #[arg(long = "type", value_parser = parse_transaction_kind)]
        kind: TransactionKind,
        /// Transaction date (YYYY-MM-DD)
        #[arg(long, value_parser = parse_iso_date)]
        date: NaiveDate,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// Remove one transaction by id
    Remove {
        /// The transaction id to remove (e.g. txn_abc123)
        id: String,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// Delete every recorded transaction
    Clear {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
        /// Emit machine-readable JSON output (requires --yes)
        #[arg(long)]
        json: bool,
    },
    /// Show the transaction history
    List {
        /// Case-insensitive title search
        #[arg(long)]
        search: Option<String>,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// Show total income, total expense, and current balance
    Summary {
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// Export the transaction history as a report file
    Export {
        /// Output format: csv or pdf
        #[arg(value_parser = parse_export_format)]
        format: ExportFormat,
        /// Case-insensitive title search applied before export
        #[arg(long)]
        search: Option<String>,
        /// Directory to write the report into (defaults to the current directory)
        #[arg(long)]
        out: Option<PathBuf>,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
pub fn parse_from<I, T>(itr: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(itr)
}
