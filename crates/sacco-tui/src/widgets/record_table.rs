//! Generic renderer for a [`RecordTable`]

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    text::Line,
    widgets::{Cell, Row, StatefulWidget, Table, TableState, Widget},
};

use sacco_app::table::{RecordTable, ACTION_LABEL};

use crate::theme::styles;

pub struct RecordTableView<'a, R> {
    table: &'a RecordTable<R>,
    title: &'a str,
    focused: bool,
    empty_text: &'a str,
}

impl<'a, R> RecordTableView<'a, R> {
    pub fn new(table: &'a RecordTable<R>, title: &'a str) -> Self {
        Self {
            table,
            title,
            focused: false,
            empty_text: "No records",
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn empty_text(mut self, text: &'a str) -> Self {
        self.empty_text = text;
        self
    }

    fn widths(&self) -> Vec<Constraint> {
        self.table
            .columns()
            .iter()
            .map(|c| Constraint::Max(c.width))
            .chain(std::iter::once(Constraint::Length(ACTION_LABEL.len() as u16)))
            .collect()
    }
}

impl<R> Widget for RecordTableView<'_, R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focused)
            .title(Line::styled(format!(" {} ", self.title), styles::accent_bold()));

        if self.table.is_empty() {
            let inner = block.inner(area);
            block.render(area, buf);
            buf.set_stringn(
                inner.x + 1,
                inner.y,
                self.empty_text,
                inner.width.saturating_sub(1) as usize,
                styles::text_muted(),
            );
            return;
        }

        let header = Row::new(
            self.table
                .headers()
                .into_iter()
                .map(|title| Cell::from(title).style(styles::accent_bold())),
        );

        let rows = (0..self.table.rows().len()).filter_map(|index| {
            let mut cells = self.table.cells(index)?;
            let action = cells.pop().unwrap_or_default();
            let mut row: Vec<Cell> = cells
                .into_iter()
                .map(|text| Cell::from(text).style(styles::text_primary()))
                .collect();
            row.push(Cell::from(action).style(styles::accent()));
            Some(Row::new(row))
        });

        let highlight = if self.focused {
            styles::focused_selected()
        } else {
            styles::unfocused_selected()
        };

        let table = Table::new(rows, self.widths())
            .header(header)
            .block(block)
            .column_spacing(1)
            .row_highlight_style(highlight);

        let mut state = TableState::default().with_selected(Some(self.table.cursor()));
        StatefulWidget::render(table, area, buf, &mut state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use sacco_app::table::{loan_columns, ACTION_COLUMN_TITLE};
    use sacco_core::LoanRecord;
    use sacco_store::fixtures::builtin_portfolio;

    fn loan_table() -> RecordTable<LoanRecord> {
        let mut table = RecordTable::new(loan_columns());
        table.set_rows(builtin_portfolio());
        table
    }

    #[test]
    fn test_renders_rows_and_action_column() {
        let table = loan_table();
        let mut term = TestTerminal::with_size(180, 8);
        let area = term.area();
        term.render_widget(RecordTableView::new(&table, "Loans"), area);

        assert!(term.buffer_contains("Loan Number"));
        assert!(term.buffer_contains(ACTION_COLUMN_TITLE));
        assert!(term.buffer_contains("LN002"));
        assert!(term.buffer_contains("Jane Smith"));
        assert!(term.buffer_contains("$120,000.00"));
        assert_eq!(term.content().matches(ACTION_LABEL).count(), 3);
    }

    #[test]
    fn test_action_column_survives_narrow_width() {
        let table = loan_table();
        let mut term = TestTerminal::with_size(60, 8);
        let area = term.area();
        term.render_widget(RecordTableView::new(&table, "Loans"), area);

        assert!(term.buffer_contains(ACTION_LABEL));
    }

    #[test]
    fn test_empty_table_text() {
        let table: RecordTable<LoanRecord> = RecordTable::new(loan_columns());
        let mut term = TestTerminal::with_size(60, 5);
        let area = term.area();
        term.render_widget(
            RecordTableView::new(&table, "Loans").empty_text("No loans found"),
            area,
        );
        assert!(term.buffer_contains("No loans found"));
    }
}
