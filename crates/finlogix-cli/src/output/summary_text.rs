use std::io;

use finlogix_store::format::format_naira;
use serde_json::Value;

use super::format::key_value_rows;
use super::warning_lines;

pub fn render_summary(data: &Value) -> io::Result<String> {
    let totals = data.get("totals").cloned().unwrap_or(Value::Null);
    let count = data.get("count").and_then(Value::as_u64).unwrap_or(0);

    let entries = [
        ("Total Income", naira_field(&totals, "total_income")),
        ("Total Expense", naira_field(&totals, "total_expense")),
        ("Current Balance", naira_field(&totals, "balance")),
    ];

    let mut lines = vec![format!("Summary ({count} transactions)"), String::new()];
    lines.extend(key_value_rows(&entries, 2));
    lines.extend(warning_lines(data));

    Ok(lines.join("\n"))
}

fn naira_field(totals: &Value, key: &str) -> String {
    format_naira(totals.get(key).and_then(Value::as_f64).unwrap_or(0.0))
}
