//! Detail modal for the selected loan

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use sacco_core::{format_currency, LoanRecord};

use super::modal_overlay::open_modal;
use crate::theme::styles;

const WIDTH: u16 = 64;

pub struct LoanDetails<'a> {
    loan: &'a LoanRecord,
}

impl<'a> LoanDetails<'a> {
    pub fn new(loan: &'a LoanRecord) -> Self {
        Self { loan }
    }

    pub fn title(&self) -> String {
        format!("Loan Details - {}", self.loan.loan_number)
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let loan = self.loan;
        let field = |label: &str, value: String| {
            Line::from(vec![
                Span::styled(format!("{:<21}", format!("{}:", label)), styles::text_secondary()),
                Span::styled(value, styles::text_primary()),
            ])
        };

        let mut lines = vec![
            field("Loan Number", loan.loan_number.clone()),
            field("Purpose", loan.purpose.clone()),
            field("Amount", format_currency(loan.amount)),
            field("Interest Rate", format!("{}%", loan.interest_rate)),
            field("Term", format!("{} months", loan.term_months)),
            field("Repayment Schedule", loan.repayment_schedule.to_string()),
            field("Status", loan.status.to_string()),
            field("Due Date", loan.due_date.format("%Y-%m-%d").to_string()),
            field("Borrower Name", loan.borrower_name.clone()),
            field("Borrower Contact", loan.borrower_contact.clone()),
            field("Outstanding Balance", format_currency(loan.outstanding_balance)),
            Line::default(),
            Line::styled("Payment History", styles::title()),
        ];

        if loan.payment_history.is_empty() {
            lines.push(Line::styled("  No payments recorded", styles::text_muted()));
        }
        for payment in &loan.payment_history {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {}  ", payment.date.format("%Y-%m-%d")),
                    styles::text_secondary(),
                ),
                Span::styled(format_currency(payment.amount), styles::text_primary()),
            ]));
        }
        lines.push(Line::default());
        lines.push(Line::styled("Esc / Enter close", styles::text_muted()));
        lines
    }
}

impl Widget for LoanDetails<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = self.lines();
        let height = lines.len() as u16 + 2;
        let inner = open_modal(buf, area, WIDTH, height, &self.title());
        let inner = Rect::new(
            inner.x + 1,
            inner.y,
            inner.width.saturating_sub(2),
            inner.height,
        );
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}
