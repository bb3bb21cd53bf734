//! Markdown table renderer
//!
//! One row per canonical operation. Doublets columns carry a speed-up
//! annotation against the fastest Neo4j variant for that row.

use crate::models::{GroupKey, ResultSet, CANONICAL_OPERATIONS};
use crate::util::units::{format_cell, format_speedup};

const OPERATION_HEADER: &str = "Operation";
const OPERATION_WIDTH: usize = 13;

/// Column width for a group: the label length, so headers fill their cells
fn column_width(key: GroupKey) -> usize {
    key.label().len()
}

fn push_row(lines: &mut Vec<String>, first: &str, cells: &[(String, usize)]) {
    let mut row = format!("| {:<width$} |", first, width = OPERATION_WIDTH);
    for (cell, width) in cells {
        row.push_str(&format!(" {:<width$} |", cell, width = *width));
    }
    lines.push(row);
}

/// Render the comparison table.
///
/// Always yields two header lines plus one row per canonical operation,
/// joined by `\n` without a trailing newline.
pub fn render_markdown_table(results: &ResultSet) -> String {
    let mut lines = Vec::with_capacity(CANONICAL_OPERATIONS.len() + 2);

    let header: Vec<(String, usize)> = GroupKey::PRESENTATION_ORDER
        .iter()
        .map(|&key| (key.label().to_string(), column_width(key)))
        .collect();
    push_row(&mut lines, OPERATION_HEADER, &header);

    let mut separator = format!("|{}|", "-".repeat(OPERATION_WIDTH + 2));
    for &key in GroupKey::PRESENTATION_ORDER.iter() {
        separator.push_str(&"-".repeat(column_width(key) + 2));
        separator.push('|');
    }
    lines.push(separator);

    for operation in CANONICAL_OPERATIONS {
        let min_neo4j = results.min_neo4j(operation);
        let cells: Vec<(String, usize)> = GroupKey::PRESENTATION_ORDER
            .iter()
            .map(|&key| {
                let nanos = results.get(key, operation).unwrap_or(0);
                let cell = if key.is_neo4j() {
                    format_cell(nanos)
                } else {
                    format_speedup(nanos, min_neo4j)
                };
                (cell, column_width(key))
            })
            .collect();
        push_row(&mut lines, operation, &cells);
    }

    lines.join("\n")
}
