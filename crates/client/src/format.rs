//! Formatting utilities for human-readable output.
//!
//! Provides the plain-text table and number formatting used by the metrics
//! summary.

/// Render rows as a left-aligned plain-text table.
///
/// Columns are separated by two spaces and padded to the widest cell;
/// trailing whitespace is trimmed from every line. Rows shorter than the
/// header are padded with empty cells.
///
/// # Examples
///
/// ```
/// use azure_rest_client::format::render_table;
///
/// let table = render_table(&["a", "bb"], &[vec!["1".into(), "2".into()]]);
/// assert_eq!(table, "a  bb\n1  2");
/// ```
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate().take(widths.len()) {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(render_line(&widths, headers.iter().copied()));
    for row in rows {
        lines.push(render_line(&widths, row.iter().map(String::as_str)));
    }
    lines.join("\n")
}

fn render_line<'a>(widths: &[usize], mut cells: impl Iterator<Item = &'a str>) -> String {
    let line = widths
        .iter()
        .map(|width| format!("{:<width$}", cells.next().unwrap_or(""), width = *width))
        .collect::<Vec<_>>()
        .join("  ");
    line.trim_end().to_string()
}

/// Format a metric value, keeping one decimal for whole numbers.
///
/// # Examples
///
/// ```
/// use azure_rest_client::format::format_value;
///
/// assert_eq!(format_value(5.0), "5.0");
/// assert_eq!(format_value(2.25), "2.25");
/// ```
pub fn format_value(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}
