//! Text rendering for `Logger::table`.
//!
//! Arrays and objects become rows keyed by `(index)`; object rows contribute
//! their keys as columns and scalar rows land in a `Values` column. A bare
//! scalar is printed as-is.

use serde_json::Value;

const INDEX_HEADER: &str = "(index)";
const VALUES_HEADER: &str = "Values";

/// Renders `value` as table lines, without trailing newlines.
#[must_use]
pub fn render_table(value: &Value) -> Vec<String> {
    let rows: Vec<(String, &Value)> = match value {
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(i, v)| (i.to_string(), v))
            .collect(),
        Value::Object(map) => map.iter().map(|(k, v)| (k.clone(), v)).collect(),
        scalar => return vec![cell_text(scalar)],
    };

    let mut columns: Vec<&str> = Vec::new();
    let mut has_values = false;
    for (_, row) in &rows {
        match row {
            Value::Object(map) => {
                for key in map.keys() {
                    if !columns.contains(&key.as_str()) {
                        columns.push(key);
                    }
                }
            }
            _ => has_values = true,
        }
    }

    let mut header = vec![INDEX_HEADER.to_string()];
    header.extend(columns.iter().map(ToString::to_string));
    if has_values {
        header.push(VALUES_HEADER.to_string());
    }

    let body: Vec<Vec<String>> = rows
        .iter()
        .map(|(index, row)| {
            let mut cells = vec![index.clone()];
            for column in &columns {
                let cell = match row {
                    Value::Object(map) => map.get(*column).map(cell_text).unwrap_or_default(),
                    _ => String::new(),
                };
                cells.push(cell);
            }
            if has_values {
                cells.push(match row {
                    Value::Object(_) => String::new(),
                    other => cell_text(other),
                });
            }
            cells
        })
        .collect();

    layout(&header, &body)
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn layout(header: &[String], body: &[Vec<String>]) -> Vec<String> {
    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in body {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let line = |cells: &[String]| -> String {
        let padded: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| format!(" {cell:<width$} "))
            .collect();
        format!("|{}|", padded.join("|"))
    };

    let separator: Vec<String> = widths.iter().map(|w| "-".repeat(w + 2)).collect();

    let mut lines = Vec::with_capacity(body.len() + 2);
    lines.push(line(header));
    lines.push(format!("|{}|", separator.join("|")));
    lines.extend(body.iter().map(|row| line(row)));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scalar_renders_single_cell() {
        assert_eq!(render_table(&json!("hello")), vec!["hello".to_string()]);
        assert_eq!(render_table(&json!(42)), vec!["42".to_string()]);
    }

    #[test]
    fn array_of_objects_uses_keys_as_columns() {
        let lines = render_table(&json!([
            {"id": 1, "name": "alpha"},
            {"id": 22, "name": "b"}
        ]));
        assert_eq!(
            lines,
            vec![
                "| (index) | id | name  |",
                "|---------|----|-------|",
                "| 0       | 1  | alpha |",
                "| 1       | 22 | b     |",
            ]
        );
    }

    #[test]
    fn array_of_scalars_uses_values_column() {
        let lines = render_table(&json!(["x", true]));
        assert_eq!(lines[0], "| (index) | Values |");
        assert_eq!(lines[2], "| 0       | x      |");
        assert_eq!(lines[3], "| 1       | true   |");
    }

    #[test]
    fn missing_keys_leave_blank_cells() {
        let lines = render_table(&json!([{"a": 1}, {"b": 2}]));
        assert_eq!(lines[0], "| (index) | a | b |");
        assert_eq!(lines[2], "| 0       | 1 |   |");
        assert_eq!(lines[3], "| 1       |   | 2 |");
    }

    #[test]
    fn empty_array_renders_header_only() {
        let lines = render_table(&json!([]));
        assert_eq!(lines, vec!["| (index) |", "|---------|"]);
    }
}
