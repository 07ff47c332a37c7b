//! Capped table model for file contents.
//!
//! The backend can return thousands of rows; the UI shows at most the
//! cap and a count of what was omitted. Kept UI-agnostic so the cap
//! logic is testable without a terminal.

use crate::api::FileContent;

/// Rows prepared for rendering, capped.
#[derive(Debug)]
pub struct ContentTable {
    pub headers: Vec<String>,
    /// At most `cap` rows, cell text in column order.
    pub rows: Vec<Vec<String>>,
    /// How many rows were cut off by the cap (0 when none).
    pub omitted: usize,
}

impl ContentTable {
    /// Builds the display rows for a file, honoring the row cap.
    pub fn build(content: &FileContent, cap: usize) -> Self {
        let rows: Vec<Vec<String>> = content
            .data
            .iter()
            .take(cap)
            .map(|row| {
                content
                    .columns
                    .iter()
                    .map(|col| FileContent::cell_text(row, col))
                    .collect()
            })
            .collect();
        let omitted = content.data.len().saturating_sub(cap);
        Self {
            headers: content.columns.clone(),
            rows,
            omitted,
        }
    }

    /// Footer notice for omitted rows, if any.
    pub fn overflow_notice(&self) -> Option<String> {
        if self.omitted > 0 {
            Some(format!("... {} more rows ...", self.omitted))
        } else {
            None
        }
    }

    /// Even column widths for the available area, with a floor so narrow
    /// terminals still show something per column.
    pub fn column_widths(&self, area_width: u16) -> Vec<u16> {
        let count = self.headers.len().max(1) as u16;
        let width = (area_width / count).max(6);
        vec![width; self.headers.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Row;
    use serde_json::json;

    fn content_with_rows(n: usize) -> FileContent {
        let data: Vec<Row> = (0..n)
            .map(|i| {
                let mut row = Row::new();
                row.insert("Datetime".to_string(), json!(format!("t{i}")));
                row.insert("Close".to_string(), json!(i as f64));
                row
            })
            .collect();
        FileContent {
            filename: "CSP1.L_15m.csv".to_string(),
            columns: vec!["Datetime".to_string(), "Close".to_string()],
            data,
        }
    }

    #[test]
    fn rows_never_exceed_cap() {
        let table = ContentTable::build(&content_with_rows(250), 100);
        assert_eq!(table.rows.len(), 100);
        assert_eq!(table.omitted, 150);
        assert_eq!(table.overflow_notice().unwrap(), "... 150 more rows ...");
    }

    #[test]
    fn no_notice_at_or_below_cap() {
        let table = ContentTable::build(&content_with_rows(100), 100);
        assert_eq!(table.rows.len(), 100);
        assert_eq!(table.omitted, 0);
        assert!(table.overflow_notice().is_none());

        let table = ContentTable::build(&content_with_rows(3), 100);
        assert_eq!(table.rows.len(), 3);
        assert!(table.overflow_notice().is_none());
    }

    #[test]
    fn ticker_cap_is_fifty() {
        let table = ContentTable::build(&content_with_rows(80), crate::tui::state::TICKER_ROW_CAP);
        assert_eq!(table.rows.len(), 50);
        assert_eq!(table.omitted, 30);
    }

    #[test]
    fn cells_follow_column_order() {
        let table = ContentTable::build(&content_with_rows(1), 100);
        assert_eq!(table.rows[0], vec!["t0".to_string(), "0.0".to_string()]);
    }
}
