mod error_text;
mod export_text;
mod format;
mod json;
mod list_text;
mod mode;
mod mutation_text;
mod summary_text;

use std::io;

use finlogix_store::{StoreError, SuccessEnvelope};
use serde_json::Value;

pub use mode::{OutputMode, mode_for_command};

pub fn print_success(success: &SuccessEnvelope, mode: OutputMode) -> io::Result<()> {
    let body = match mode {
        OutputMode::Text => render_text_success(success)?,
        OutputMode::Json => json::render_success_json(success)?,
    };
    println!("{body}");
    Ok(())
}

pub fn print_failure(error: &StoreError, mode: OutputMode) -> io::Result<()> {
    let body = match mode {
        OutputMode::Json => json::render_error_json(error)?,
        OutputMode::Text => error_text::render_error(error),
    };
    println!("{body}");
    Ok(())
}

fn render_text_success(success: &SuccessEnvelope) -> io::Result<String> {
    match success.command.as_str() {
        "add" => mutation_text::render_add(&success.data),
        "remove" => mutation_text::render_remove(&success.data),
        "clear" => mutation_text::render_clear(&success.data),
        "list" => list_text::render_list(&success.data),
        "summary" => summary_text::render_summary(&success.data),
        "export" => export_text::render_export(&success.data),
        _ => Err(io::Error::other(format!(
            "unsupported text output command `{}`",
            success.command
        ))),
    }
}

pub(crate) fn warning_lines(data: &Value) -> Vec<String> {
    let Some(warnings) = data.get("warnings").and_then(Value::as_array) else {
        return Vec::new();
    };
    if warnings.is_empty() {
        return Vec::new();
    }

    let mut lines = vec![String::new()];
    for warning in warnings {
        let message = warning
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("unspecified warning");
        lines.push(format!("  Warning: {message}"));
    }
    lines
}
