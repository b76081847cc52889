use std::path::Path;

use serde_json::{Value, json};
use thiserror::Error;

use crate::contracts::types::ValidationIssue;

#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct StoreError {
    pub code: String,
    pub message: String,
    pub recovery_steps: Vec<String>,
    pub data: Option<Value>,
}

impl StoreError {
    pub fn new(code: &str, message: &str, recovery_steps: Vec<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.to_string(),
            recovery_steps,
            data: None,
        }
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn invalid_argument(message: &str) -> Self {
        Self::invalid_argument_for_command(message, None)
    }

    pub fn invalid_argument_for_command(message: &str, command: Option<&str>) -> Self {
        let help_hint = match command {
            Some(cmd) => format!("Run `finlogix {cmd} --help` for usage."),
            None => "Run `finlogix --help` for usage.".to_string(),
        };
        let error = Self::new("invalid_argument", message, vec![help_hint]);
        if let Some(cmd) = command {
            return error.with_data(json!({
                "command_hint": cmd,
            }));
        }
        error
    }

    pub fn invalid_argument_with_recovery(message: &str, recovery_steps: Vec<String>) -> Self {
        Self::new("invalid_argument", message, recovery_steps)
    }

    pub fn validation_failed(issues: Vec<ValidationIssue>) -> Self {
        let issue_count = issues.len();
        Self::new(
            "validation_failed",
            &format!("Transaction was rejected: {issue_count} fields need fixes. Nothing was recorded."),
            vec![
                "Fix the listed fields and rerun `finlogix add`.".to_string(),
                "Run `finlogix add --help` to review field requirements.".to_string(),
            ],
        )
        .with_data(json!({
            "issues": issues,
        }))
    }

    pub fn duplicate_transaction_id(id: &str) -> Self {
        Self::new(
            "duplicate_transaction_id",
            &format!("A transaction with id `{id}` already exists."),
            vec![
                "Run `finlogix list` to inspect the existing transaction.".to_string(),
                "Retry the add without supplying an explicit id.".to_string(),
            ],
        )
        .with_data(json!({
            "id": id,
        }))
    }

    pub fn unknown_export_format(format: &str) -> Self {
        Self::new(
            "unknown_export_format",
            &format!("Export format `{format}` is not supported."),
            vec!["Use `finlogix export csv` or `finlogix export pdf`.".to_string()],
        )
    }

    pub fn export_write_failed(path: &Path, detail: &str) -> Self {
        let location = path.display().to_string();
        Self::new(
            "export_write_failed",
            &format!("Could not write export file at `{location}`: {detail}"),
            vec![format!(
                "Choose a writable directory with `--out`, or grant write access to `{location}`."
            )],
        )
    }

    pub fn internal_render_error(message: &str) -> Self {
        Self::new("internal_render_error", message, Vec::new())
    }

    pub fn internal_serialization(message: &str) -> Self {
        Self::new("internal_serialization_error", message, Vec::new())
    }

    pub fn store_init_permission_denied(path: &Path, detail: &str) -> Self {
        let location = path.display().to_string();
        Self::new(
            "store_init_permission_denied",
            &format!("Cannot initialize transaction store at `{location}`: {detail}"),
            vec![format!(
                "Grant write access to `{location}` or set `FINLOGIX_HOME` to a writable directory."
            )],
        )
    }

    pub fn store_init_failed(path: &Path, detail: &str) -> Self {
        let location = path.display().to_string();
        Self::new(
            "store_init_failed",
            &format!("Transaction store initialization failed at `{location}`: {detail}"),
            Vec::new(),
        )
    }

    pub fn persist_failed(path: &Path, detail: &str) -> Self {
        let location = path.display().to_string();
        Self::new(
            "persist_failed",
            &format!("Could not save transactions to `{location}`: {detail}"),
            vec![
                format!("Free up space or grant write access to `{location}`."),
                "Recent changes are kept for this session but may not survive a restart."
                    .to_string(),
            ],
        )
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
