//! Generic record table model
//!
//! Rows are rendered from an ordered list of [`ColumnSpec`]s plus one
//! synthesized trailing action column. Activating a row passes the record to
//! a [`DetailSink`].

use std::sync::Arc;

use sacco_core::{format_currency, LoanRecord};

use crate::selection::DetailSink;

/// Header of the synthesized trailing column
pub const ACTION_COLUMN_TITLE: &str = "Action";

/// Cell text of the synthesized trailing column
pub const ACTION_LABEL: &str = "View Details";

/// One column: header, display width and a cell formatter.
pub struct ColumnSpec<R> {
    pub title: &'static str,
    pub width: u16,
    pub value: fn(&R) -> String,
}

impl<R> ColumnSpec<R> {
    pub const fn new(title: &'static str, width: u16, value: fn(&R) -> String) -> Self {
        Self {
            title,
            width,
            value,
        }
    }
}

// Derives would require `R: Clone`.
impl<R> Clone for ColumnSpec<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for ColumnSpec<R> {}

impl<R> std::fmt::Debug for ColumnSpec<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColumnSpec")
            .field("title", &self.title)
            .field("width", &self.width)
            .finish()
    }
}

/// Rows, columns and a cursor.
#[derive(Debug)]
pub struct RecordTable<R> {
    columns: Vec<ColumnSpec<R>>,
    rows: Vec<Arc<R>>,
    cursor: usize,
}

impl<R> RecordTable<R> {
    pub fn new(columns: Vec<ColumnSpec<R>>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            cursor: 0,
        }
    }

    /// Replace every row. The cursor is clamped to the new length.
    pub fn set_rows(&mut self, rows: impl IntoIterator<Item = R>) {
        self.rows = rows.into_iter().map(Arc::new).collect();
        self.cursor = self.cursor.min(self.rows.len().saturating_sub(1));
    }

    pub fn clear(&mut self) {
        self.rows.clear();
        self.cursor = 0;
    }

    pub fn rows(&self) -> &[Arc<R>] {
        &self.rows
    }

    pub fn columns(&self) -> &[ColumnSpec<R>] {
        &self.columns
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Column headers including the trailing action column.
    pub fn headers(&self) -> Vec<&'static str> {
        self.columns
            .iter()
            .map(|c| c.title)
            .chain(std::iter::once(ACTION_COLUMN_TITLE))
            .collect()
    }

    /// Cell text for row `index` including the trailing action cell.
    pub fn cells(&self, index: usize) -> Option<Vec<String>> {
        let row = self.rows.get(index)?;
        Some(
            self.columns
                .iter()
                .map(|c| (c.value)(row))
                .chain(std::iter::once(ACTION_LABEL.to_string()))
                .collect(),
        )
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < self.rows.len() {
            self.cursor += 1;
        }
    }

    pub fn select_index(&mut self, index: usize) {
        if index < self.rows.len() {
            self.cursor = index;
        }
    }

    pub fn highlighted(&self) -> Option<&Arc<R>> {
        self.rows.get(self.cursor)
    }

    /// Invoke the row action on the highlighted row.
    ///
    /// Returns `false` when the table is empty.
    pub fn activate(&self, sink: &mut impl DetailSink<R>) -> bool {
        match self.highlighted() {
            Some(row) => {
                sink.on_select(Arc::clone(row));
                true
            }
            None => false,
        }
    }
}

/// Columns of the loan management table.
pub fn loan_columns() -> Vec<ColumnSpec<LoanRecord>> {
    vec![
        ColumnSpec::new("Loan Number", 11, |l: &LoanRecord| l.loan_number.clone()),
        ColumnSpec::new("Amount", 13, |l: &LoanRecord| format_currency(l.amount)),
        ColumnSpec::new("Interest Rate", 13, |l: &LoanRecord| {
            format!("{}%", l.interest_rate)
        }),
        ColumnSpec::new("Repayment Schedule", 18, |l: &LoanRecord| {
            l.repayment_schedule.to_string()
        }),
        ColumnSpec::new("Outstanding Balance", 19, |l: &LoanRecord| {
            format_currency(l.outstanding_balance)
        }),
        ColumnSpec::new("Due Date", 10, |l: &LoanRecord| {
            l.due_date.format("%Y-%m-%d").to_string()
        }),
        ColumnSpec::new("Status", 7, |l: &LoanRecord| l.status.to_string()),
        ColumnSpec::new("Borrower Name", 14, |l: &LoanRecord| {
            l.borrower_name.clone()
        }),
        ColumnSpec::new("Borrower Contact", 25, |l: &LoanRecord| {
            l.borrower_contact.clone()
        }),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::DetailSelector;

    #[derive(Debug, PartialEq)]
    struct Item {
        name: &'static str,
        qty: u32,
    }

    fn item_table() -> RecordTable<Item> {
        let mut table = RecordTable::new(vec![
            ColumnSpec::new("Name", 8, |i: &Item| i.name.to_string()),
            ColumnSpec::new("Qty", 4, |i: &Item| i.qty.to_string()),
        ]);
        table.set_rows([
            Item { name: "a", qty: 1 },
            Item { name: "b", qty: 2 },
        ]);
        table
    }

    #[test]
    fn test_headers_end_with_action_column() {
        let table = item_table();
        assert_eq!(table.headers(), ["Name", "Qty", "Action"]);
    }

    #[test]
    fn test_cells_end_with_action_label() {
        let table = item_table();
        assert_eq!(
            table.cells(1).unwrap(),
            vec!["b".to_string(), "2".to_string(), "View Details".to_string()]
        );
        assert!(table.cells(2).is_none());
    }

    #[test]
    fn test_cursor_bounds() {
        let mut table = item_table();
        table.cursor_up();
        assert_eq!(table.cursor(), 0);
        table.cursor_down();
        table.cursor_down();
        assert_eq!(table.cursor(), 1);

        table.set_rows([Item { name: "z", qty: 0 }]);
        assert_eq!(table.cursor(), 0);
    }

    #[test]
    fn test_activate_selects_highlighted_row() {
        let mut table = item_table();
        let mut selector = DetailSelector::new();

        table.cursor_down();
        assert!(table.activate(&mut selector));
        assert_eq!(selector.selected().map(|i| i.name), Some("b"));
        assert!(Arc::ptr_eq(
            selector.selected_arc().unwrap(),
            &table.rows()[1]
        ));
    }

    #[test]
    fn test_activate_on_empty_table() {
        let table: RecordTable<Item> = RecordTable::new(Vec::new());
        let mut selector = DetailSelector::new();
        assert!(!table.activate(&mut selector));
        assert!(!selector.is_open());
        assert_eq!(table.headers(), ["Action"]);
    }

    #[test]
    fn test_loan_columns() {
        let titles: Vec<_> = loan_columns().iter().map(|c| c.title).collect();
        assert_eq!(titles.first(), Some(&"Loan Number"));
        assert_eq!(titles.last(), Some(&"Borrower Contact"));
        assert_eq!(titles.len(), 9);
    }
}
