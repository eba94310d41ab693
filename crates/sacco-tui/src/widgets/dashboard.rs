//! Dashboard: greeting, summary cards, charts and the active loan list

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use sacco_app::state::DashboardState;
use sacco_core::{format_change, format_currency, MemberProfile};

use super::charts::{DistributionBars, TrendChart};
use crate::theme::styles;

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub const EMPTY_LOANS_TEXT: &str = "You have no active loans at the moment.";

pub fn spinner_frame(tick: u64) -> &'static str {
    SPINNER[(tick as usize) % SPINNER.len()]
}

pub struct DashboardView<'a> {
    state: &'a DashboardState,
    member: &'a MemberProfile,
    credit_limit: u64,
    focused: bool,
    tick: u64,
}

impl<'a> DashboardView<'a> {
    pub fn new(state: &'a DashboardState, member: &'a MemberProfile, credit_limit: u64) -> Self {
        Self {
            state,
            member,
            credit_limit,
            focused: false,
            tick: 0,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn tick(mut self, tick: u64) -> Self {
        self.tick = tick;
        self
    }

    fn render_loading(&self, area: Rect, buf: &mut Buffer) {
        let [_, row, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(area);
        Paragraph::new(Line::from(vec![
            Span::styled(spinner_frame(self.tick), styles::accent_bold()),
            Span::styled(" Loading dashboard...", styles::text_secondary()),
        ]))
        .alignment(Alignment::Center)
        .render(row, buf);
    }

    fn render_cards(&self, area: Rect, buf: &mut Buffer) {
        let stats = &self.state.stats;
        let trend = self.state.snapshot.as_ref().map(|s| &s.trend);
        let savings = trend.map(|t| t.latest_savings()).unwrap_or(0);
        let growth = trend
            .and_then(|t| t.growth_percent())
            .map(|p| format!("{} from last month", format_change(p)))
            .unwrap_or_default();

        let cards = [
            (
                "Total Active Loans",
                stats.active_loan_count.to_string(),
                format_currency(stats.total_loan_amount),
            ),
            (
                "Pending Applications",
                stats.pending_application_count.to_string(),
                format_currency(stats.total_pending_amount),
            ),
            ("Savings Balance", format_currency(savings), growth),
        ];

        let areas = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(area);
        for ((title, value, detail), card) in cards.into_iter().zip(areas.iter()) {
            let block = styles::glass_block(false).title(Line::styled(
                format!(" {} ", title),
                styles::text_secondary(),
            ));
            let inner = block.inner(*card);
            block.render(*card, buf);
            Paragraph::new(vec![
                Line::styled(value, styles::accent_bold()),
                Line::styled(detail, styles::text_muted()),
            ])
            .render(inner, buf);
        }
    }

    fn render_charts(&self, area: Rect, buf: &mut Buffer) {
        let [trend_area, distribution_area] =
            Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
                .areas(area);

        let trend_block = styles::glass_block(false).title(" Balance Trend ");
        let inner = trend_block.inner(trend_area);
        trend_block.render(trend_area, buf);
        TrendChart::new(&self.state.trend_chart()).render(inner, buf);

        let distribution_block = styles::glass_block(false).title(" Financial Distribution ");
        let inner = distribution_block.inner(distribution_area);
        distribution_block.render(distribution_area, buf);
        DistributionBars::new(&self.state.distribution_chart(self.credit_limit)).render(inner, buf);
    }

    fn render_active_loans(&self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focused).title(" Active Loans ");
        let inner = block.inner(area);
        block.render(area, buf);

        let loans = self.state.active_loans();
        if loans.is_empty() {
            buf.set_stringn(
                inner.x + 1,
                inner.y,
                EMPTY_LOANS_TEXT,
                inner.width.saturating_sub(1) as usize,
                styles::text_muted(),
            );
            return;
        }

        for (i, loan) in loans.iter().enumerate().take(inner.height as usize) {
            let row = Rect::new(inner.x, inner.y + i as u16, inner.width, 1);
            let selected = i == self.state.cursor;
            let style = match (selected, self.focused) {
                (true, true) => styles::focused_selected(),
                (true, false) => styles::unfocused_selected(),
                _ => styles::text_primary(),
            };
            buf.set_style(row, style);
            let text = format!(
                " {}  ·  {}  ·  {} months",
                loan.purpose,
                format_currency(loan.amount),
                loan.term_months
            );
            buf.set_stringn(row.x, row.y, text, row.width as usize, style);
        }
    }
}

impl Widget for DashboardView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.state.loading {
            self.render_loading(area, buf);
            return;
        }

        let loan_rows = self.state.active_loans().len().max(1) as u16 + 2;
        let [welcome, cards, charts, loans] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(4),
            Constraint::Min(6),
            Constraint::Length(loan_rows),
        ])
        .areas(area);

        let mut greeting = vec![Line::from(vec![
            Span::styled(format!(" Welcome, {}", self.member.name), styles::title()),
            Span::styled(
                format!("  Member #{}", self.member.member_number),
                styles::text_muted(),
            ),
        ])];
        if let Some(error) = &self.state.error {
            greeting.push(Line::styled(
                format!(" {} (press r to retry)", error),
                styles::error_text(),
            ));
        }
        Paragraph::new(greeting).render(welcome, buf);

        self.render_cards(cards, buf);
        self.render_charts(charts, buf);
        self.render_active_loans(loans, buf);
    }
}
