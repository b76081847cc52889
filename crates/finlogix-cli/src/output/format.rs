use std::cmp;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Align {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy)]
pub struct Column<'a> {
    pub name: &'a str,
    pub align: Align,
}

const INDENT: usize = 2;
const COLUMN_GAP: &str = "  ";

pub fn key_value_rows(entries: &[(&str, String)], indent: usize) -> Vec<String> {
    if entries.is_empty() {
        return Vec::new();
    }

    let label_width = entries
        .iter()
        .map(|(label, _)| label.len())
        .max()
        .unwrap_or(0);
    let padding = " ".repeat(indent);

    entries
        .iter()
        .map(|(label, value)| format!("{padding}{label:<label_width$}  {value}"))
        .collect()
}

/// Fixed-layout table: header row plus data rows, each column as wide as
/// its widest cell. Amounts are short enough that wrapping is not worth
/// the machinery here.
pub fn render_table(columns: &[Column<'_>], rows: &[Vec<String>]) -> Vec<String> {
    if columns.is_empty() {
        return Vec::new();
    }

    let widths = natural_column_widths(columns, rows);

    let mut output = Vec::with_capacity(rows.len() + 1);
    let header: Vec<String> = columns.iter().map(|c| c.name.to_string()).collect();
    output.push(format_row(columns, &header, &widths));

    for row in rows {
        output.push(format_row(columns, row, &widths));
    }

    output
}

fn natural_column_widths(columns: &[Column<'_>], rows: &[Vec<String>]) -> Vec<usize> {
    let mut widths = columns
        .iter()
        .map(|column| column.name.chars().count())
        .collect::<Vec<usize>>();

    for row in rows {
        for (index, value) in row.iter().enumerate() {
            if let Some(slot) = widths.get_mut(index) {
                *slot = cmp::max(*slot, value.chars().count());
            }
        }
    }

    widths
}

fn format_row(columns: &[Column<'_>], cells: &[String], widths: &[usize]) -> String {
    let mut pieces = Vec::with_capacity(columns.len());
    for (index, column) in columns.iter().enumerate() {
        let width = *widths.get(index).unwrap_or(&0);
        let value = cells.get(index).cloned().unwrap_or_default();
        let pad = width.saturating_sub(value.chars().count());

        let piece = match column.align {
            Align::Left => format!("{value}{}", " ".repeat(pad)),
            Align::Right => format!("{}{value}", " ".repeat(pad)),
        };
        pieces.push(piece);
    }

    let line = format!("{}{}", " ".repeat(INDENT), pieces.join(COLUMN_GAP));
    line.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::{Align, Column, key_value_rows, render_table};

    #[test]
    fn key_value_rows_align_on_the_widest_label() {
        let rows = key_value_rows(
            &[
                ("Total Income", "₦150,000.00".to_string()),
                ("Balance", "₦105,000.00".to_string()),
            ],
            2,
        );

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], "  Total Income  ₦150,000.00");
        assert_eq!(rows[1], "  Balance       ₦105,000.00");
    }

    #[test]
    fn table_pads_each_column_to_its_widest_cell() {
        let columns = [
            Column {
                name: "Description",
                align: Align::Left,
            },
            Column {
                name: "Amount",
                align: Align::Right,
            },
        ];
        let rows = vec![
            vec!["Rent".to_string(), "₦45,000.00".to_string()],
            vec!["Fuel top-up".to_string(), "₦2,000.00".to_string()],
        ];

        let lines = render_table(&columns, &rows);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "  Description      Amount");
        assert_eq!(lines[1], "  Rent         ₦45,000.00");
        assert_eq!(lines[2], "  Fuel top-up   ₦2,000.00");
    }

    #[test]
    fn multibyte_currency_symbols_do_not_break_alignment() {
        let columns = [Column {
            name: "Amount",
            align: Align::Right,
        }];
        let rows = vec![
            vec!["₦1.00".to_string()],
            vec!["₦100.00".to_string()],
        ];

        let lines = render_table(&columns, &rows);
        assert_eq!(lines[1], "    ₦1.00");
        assert_eq!(lines[2], "  ₦100.00");
    }
}
