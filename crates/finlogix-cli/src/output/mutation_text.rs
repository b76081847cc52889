use std::io;

use finlogix_store::format::format_naira;
use serde_json::Value;

use super::warning_lines;

pub fn render_add(data: &Value) -> io::Result<String> {
    let transaction = data.get("transaction").cloned().unwrap_or(Value::Null);
    let title = transaction.get("title").and_then(Value::as_str).unwrap_or("");
    let kind = transaction.get("type").and_then(Value::as_str).unwrap_or("");
    let amount = transaction
        .get("amount")
        .and_then(Value::as_f64)
        .unwrap_or(0.0);
    let date = transaction.get("date").and_then(Value::as_str).unwrap_or("");
    let id = transaction.get("id").and_then(Value::as_str).unwrap_or("");
    let count = data.get("count").and_then(Value::as_u64).unwrap_or(0);

    let mut lines = vec![
        "Transaction added successfully!".to_string(),
        String::new(),
        format!("  Recorded {kind} \"{title}\" of {} on {date}.", format_naira(amount)),
        format!("  Id: {id}"),
        format!("  Transactions on record: {count}"),
    ];
    lines.extend(warning_lines(data));

    Ok(lines.join("\n"))
}

pub fn render_remove(data: &Value) -> io::Result<String> {
    let id = data.get("id").and_then(Value::as_str).unwrap_or("");
    let removed = data
        .get("removed")
        .and_then(Value::as_bool)
        .unwrap_or(false);
    let count = data.get("count").and_then(Value::as_u64).unwrap_or(0);

    let mut lines = if removed {
        vec![
            format!("Removed transaction {id}."),
            format!("  Transactions on record: {count}"),
        ]
    } else {
        vec![
            format!("No transaction with id {id}; nothing was removed."),
            "  Run `finlogix list` to look up transaction ids.".to_string(),
        ]
    };
    lines.extend(warning_lines(data));

    Ok(lines.join("\n"))
}

pub fn render_clear(data: &Value) -> io::Result<String> {
    let cancelled = data
        .get("cancelled")
        .and_then(Value::as_bool)
        .unwrap_or(false);
    if cancelled {
        return Ok("Cancelled. Nothing was deleted.".to_string());
    }

    let cleared_count = data
        .get("cleared_count")
        .and_then(Value::as_u64)
        .unwrap_or(0);

    let mut lines = vec![format!("Deleted all {cleared_count} transactions.")];
    lines.extend(warning_lines(data));

    Ok(lines.join("\n"))
}
