use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::TransactionStore;
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::ExportData;
use crate::export::{ExportFormat, render_csv, render_pdf, report_file_name};
use crate::search::filter_by_title;
use crate::{StoreError, StoreResult};

use super::collect_warnings;

#[derive(Debug, Clone)]
pub struct ExportInput {
    pub format: ExportFormat,
    /// Optional title search; when set the export covers the filtered
    /// view, exactly what a filtered list would show.
    pub query: Option<String>,
    /// Target directory for the artifact. Defaults to the current
    /// working directory.
    pub out_dir: Option<PathBuf>,
    /// Supplied by the caller so the library stays clock-free.
    pub today: NaiveDate,
}

pub fn run(input: ExportInput) -> StoreResult<SuccessEnvelope> {
    run_with_home_override(input, None)
}

#[doc(hidden)]
pub fn run_with_home_override(
    input: ExportInput,
    home_override: Option<&Path>,
) -> StoreResult<SuccessEnvelope> {
    let store = TransactionStore::open_with(home_override)?;
    let rows = filter_by_title(store.snapshot(), input.query.as_deref().unwrap_or(""));

    let bytes = match input.format {
        ExportFormat::Csv => render_csv(&rows)?,
        ExportFormat::Pdf => render_pdf(&rows)?,
    };

    let file_name = report_file_name(input.format, input.today);
    let out_dir = input.out_dir.unwrap_or_else(|| PathBuf::from("."));
    let path = out_dir.join(&file_name);

    fs::write(&path, bytes)
        .map_err(|error| StoreError::export_write_failed(&path, &error.to_string()))?;

    let data = ExportData {
        format: input.format.as_str().to_string(),
        file_name,
        path: path.display().to_string(),
        rows_exported: rows.len(),
        query: input.query,
        warnings: collect_warnings(&store, None),
    };

    success("export", data)
}
