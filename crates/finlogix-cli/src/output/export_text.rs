use std::io;

use serde_json::Value;

use super::warning_lines;

pub fn render_export(data: &Value) -> io::Result<String> {
    let file_name = data.get("file_name").and_then(Value::as_str).unwrap_or("");
    let path = data.get("path").and_then(Value::as_str).unwrap_or("");
    let rows = data
        .get("rows_exported")
        .and_then(Value::as_u64)
        .unwrap_or(0);
    let query = data.get("query").and_then(Value::as_str);

    let noun = if rows == 1 { "transaction" } else { "transactions" };
    let mut lines = vec![format!("Wrote {file_name} ({rows} {noun})."), String::new()];
    if let Some(term) = query {
        lines.push(format!("  Filtered by search \"{term}\"."));
    }
    lines.push(format!("  Saved to: {path}"));
    lines.extend(warning_lines(data));

    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::render_export;

    #[test]
    fn reports_file_name_row_count_and_path() {
        let data = json!({
            "format": "csv",
            "file_name": "FinLogix_Report_2025-01-10.csv",
            "path": "/tmp/FinLogix_Report_2025-01-10.csv",
            "rows_exported": 3,
            "warnings": []
        });

        let rendered = render_export(&data);
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            assert!(text.contains("Wrote FinLogix_Report_2025-01-10.csv (3 transactions)."));
            assert!(text.contains("Saved to: /tmp/FinLogix_Report_2025-01-10.csv"));
        }
    }

    #[test]
    fn mentions_the_search_filter_when_present() {
        let data = json!({
            "format": "pdf",
            "file_name": "FinLogix_Report_2025-01-10.pdf",
            "path": "/tmp/FinLogix_Report_2025-01-10.pdf",
            "rows_exported": 1,
            "query": "rent",
            "warnings": []
        });

        let rendered = render_export(&data);
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            assert!(text.contains("(1 transaction)."));
            assert!(text.contains("Filtered by search \"rent\"."));
        }
    }
}
