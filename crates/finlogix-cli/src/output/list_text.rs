use std::io;

use finlogix_store::export::report_row;
use finlogix_store::model::Transaction;
use serde_json::Value;

use super::format::{Align, Column, render_table};
use super::warning_lines;

const LIST_COLUMNS: [Column<'static>; 5] = [
    Column {
        name: "Id",
        align: Align::Left,
    },
    Column {
        name: "Date",
        align: Align::Left,
    },
    Column {
        name: "Description",
        align: Align::Left,
    },
    Column {
        name: "Type",
        align: Align::Left,
    },
    Column {
        name: "Amount (₦)",
        align: Align::Right,
    },
];

pub fn render_list(data: &Value) -> io::Result<String> {
    let transactions: Vec<Transaction> = data
        .get("rows")
        .cloned()
        .map(serde_json::from_value)
        .transpose()
        .map_err(io::Error::other)?
        .unwrap_or_default();

    let total = data.get("total").and_then(Value::as_u64).unwrap_or(0);
    let query = data.get("query").and_then(Value::as_str);

    let mut lines = vec!["Transaction History".to_string(), String::new()];

    if let Some(term) = query {
        lines.push(format!(
            "  Search \"{term}\" matched {} of {total} transactions.",
            transactions.len()
        ));
        lines.push(String::new());
    }

    if transactions.is_empty() {
        if query.is_some() {
            lines.push("  No matching transactions.".to_string());
        } else {
            lines.push("  No transactions recorded yet.".to_string());
            lines.push("  Run `finlogix add --help` to record your first one.".to_string());
        }
    } else {
        let rows: Vec<Vec<String>> = transactions
            .iter()
            .map(|transaction| {
                let formatted = report_row(transaction);
                let mut row = vec![transaction.id.clone()];
                row.extend(formatted);
                row
            })
            .collect();
        lines.extend(render_table(&LIST_COLUMNS, &rows));
    }

    lines.extend(warning_lines(data));
    Ok(lines.join("\n"))
}
