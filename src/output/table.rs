//! Table output formatting

use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Rows},
};

/// Format rows as a rounded table, or `empty` when there are none
pub fn format_table<T: Tabled>(rows: &[T], empty: &str) -> String {
    if rows.is_empty() {
        return empty.to_string();
    }

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Tabled)]
    struct Row {
        #[tabled(rename = "AUTHORIZATION ID")]
        id: String,
        #[tabled(rename = "NAME")]
        name: String,
    }

    #[test]
    fn test_format_table_empty_uses_message() {
        let rows: Vec<Row> = vec![];
        assert_eq!(format_table(&rows, "No PATs found."), "No PATs found.");
    }

    #[test]
    fn test_format_table_rows() {
        let rows = vec![
            Row {
                id: "4b1e".to_string(),
                name: "ci-bot".to_string(),
            },
            Row {
                id: "9c2f".to_string(),
                name: "deploy".to_string(),
            },
        ];

        let result = format_table(&rows, "");

        assert!(result.contains("AUTHORIZATION ID"));
        assert!(result.contains("ci-bot"));
        assert!(result.contains("deploy"));
        // Rounded style corners
        assert!(result.contains("╭"));
        assert!(result.contains("╰"));
    }
}
