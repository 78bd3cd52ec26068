//! Table builder wrapper around comfy-table for consistent list display.

use comfy_table::{presets, Cell, CellAlignment, ContentArrangement, Table};
use console::style;

/// Create a standard list table with the given headers.
///
/// Uses the NOTHING preset (no borders) for a clean CLI aesthetic.
pub fn list_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::NOTHING)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(
            headers
                .iter()
                .map(|h| Cell::new(h.to_uppercase()).set_alignment(CellAlignment::Left)),
        );
    table
}

/// Build a table from summary rows.
pub fn rows_table(headers: &[&str], rows: impl IntoIterator<Item = Vec<String>>) -> Table {
    let mut table = list_table(headers);
    for row in rows {
        table.add_row(row);
    }
    table
}

/// Render the table to string with a count header.
///
/// `empty_message` is printed instead of the table when there are no rows.
pub fn render_list(label: &str, table: &Table, total: usize, empty_message: &str) -> String {
    if total == 0 {
        return empty_message.to_string();
    }
    format!("{} {}:\n{}", style(total).bold(), label, table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_list_empty_uses_message() {
        let table = list_table(&["Name"]);
        assert_eq!(
            render_list("helplines", &table, 0, "No helplines available."),
            "No helplines available."
        );
    }

    #[test]
    fn test_render_list_has_rows_and_headers() {
        let table = rows_table(
            &["Name", "Number"],
            [vec!["Fire Department".to_string(), "1-800-FIRE".to_string()]],
        );
        let out = console::strip_ansi_codes(&render_list("helplines", &table, 1, "")).to_string();
        assert!(out.starts_with("1 helplines:"));
        assert!(out.contains("NAME"));
        assert!(out.contains("1-800-FIRE"));
    }
}
