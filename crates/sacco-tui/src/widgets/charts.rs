//! Bar charts drawn straight into the buffer

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

use sacco_core::{format_currency, ChartData};

use crate::theme::{palette, styles};

/// Eighth-block glyphs for the partial top cell of a bar
const PARTIAL: [&str; 8] = [" ", "▁", "▂", "▃", "▄", "▅", "▆", "▇"];

/// Height in eighths of a cell for `value` scaled against `max`.
fn scaled_eighths(value: u64, max: u64, rows: u16) -> u64 {
    if max == 0 {
        return 0;
    }
    value.saturating_mul(rows as u64 * 8) / max
}

/// Grouped vertical bars, one group per label and one bar per dataset.
pub struct TrendChart<'a> {
    chart: &'a ChartData,
    colors: &'a [ratatui::style::Color],
}

impl<'a> TrendChart<'a> {
    pub fn new(chart: &'a ChartData) -> Self {
        Self {
            chart,
            colors: &[palette::SERIES_SAVINGS, palette::SERIES_LOANS],
        }
    }

    fn color(&self, dataset: usize) -> ratatui::style::Color {
        self.colors
            .get(dataset % self.colors.len().max(1))
            .copied()
            .unwrap_or(palette::ACCENT)
    }

    fn render_legend(&self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();
        for (i, dataset) in self.chart.datasets.iter().enumerate() {
            spans.push(Span::styled("■ ", Style::default().fg(self.color(i))));
            spans.push(Span::styled(format!("{}  ", dataset.label), styles::text_secondary()));
        }
        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}

impl Widget for TrendChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.chart.is_empty() || area.height < 3 || area.width == 0 {
            buf.set_stringn(area.x, area.y, "No data", area.width as usize, styles::text_muted());
            return;
        }

        self.render_legend(Rect::new(area.x, area.y, area.width, 1), buf);

        let groups = self.chart.labels.len() as u16;
        let group_width = area.width / groups.max(1);
        if group_width == 0 {
            return;
        }
        let series = self.chart.datasets.len() as u16;
        let bar_width = (group_width.saturating_sub(1) / series.max(1)).max(1);

        let bars_top = area.y + 1;
        let label_y = area.bottom() - 1;
        let rows = label_y - bars_top;
        let max = self.chart.max_value();

        for (g, label) in self.chart.labels.iter().enumerate() {
            let group_x = area.x + g as u16 * group_width;
            buf.set_stringn(group_x, label_y, label, group_width as usize, styles::text_muted());

            for (s, dataset) in self.chart.datasets.iter().enumerate() {
                let value = dataset.data.get(g).copied().unwrap_or(0);
                let eighths = scaled_eighths(value, max, rows);
                let style = Style::default().fg(self.color(s));
                let x0 = group_x + s as u16 * bar_width;

                for row in 0..rows {
                    let filled = eighths.saturating_sub(row as u64 * 8).min(8) as usize;
                    if filled == 0 {
                        break;
                    }
                    let glyph = if filled == 8 { "█" } else { PARTIAL[filled] };
                    let y = label_y - 1 - row;
                    for x in x0..(x0 + bar_width).min(group_x + group_width) {
                        buf.set_string(x, y, glyph, style);
                    }
                }
            }
        }
    }
}

/// Horizontal bars of the first dataset, labelled with currency values.
pub struct DistributionBars<'a> {
    chart: &'a ChartData,
}

impl<'a> DistributionBars<'a> {
    pub fn new(chart: &'a ChartData) -> Self {
        Self { chart }
    }
}

impl Widget for DistributionBars<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(dataset) = self.chart.datasets.first() else {
            return;
        };
        let label_width = self
            .chart
            .labels
            .iter()
            .map(|l| l.width())
            .max()
            .unwrap_or(0) as u16
            + 1;
        let max = dataset.max();

        for (i, label) in self.chart.labels.iter().enumerate() {
            let y = area.y + i as u16 * 2;
            if y >= area.bottom() {
                break;
            }
            let color = palette::DISTRIBUTION[i % palette::DISTRIBUTION.len()];
            let value = dataset.data.get(i).copied().unwrap_or(0);
            let amount = format_currency(value);

            buf.set_stringn(area.x, y, label, area.width as usize, styles::text_secondary());

            let bar_space = area
                .width
                .saturating_sub(label_width + amount.width() as u16 + 1);
            let cells = if max == 0 {
                0
            } else {
                (value.saturating_mul(bar_space as u64) / max) as u16
            };
            let bar_x = area.x + label_width;
            if bar_x < area.right() {
                buf.set_stringn(
                    bar_x,
                    y,
                    "█".repeat(cells as usize),
                    bar_space as usize,
                    Style::default().fg(color),
                );
                buf.set_stringn(
                    bar_x + cells + 1,
                    y,
                    &amount,
                    area.right().saturating_sub(bar_x + cells + 1) as usize,
                    styles::text_primary(),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use sacco_core::{financial_distribution, BalanceTrend, DashboardStats};

    #[test]
    fn test_scaled_eighths() {
        assert_eq!(scaled_eighths(50, 100, 4), 16);
        assert_eq!(scaled_eighths(100, 100, 4), 32);
        assert_eq!(scaled_eighths(1, 0, 4), 0);
    }

    #[test]
    fn test_trend_chart_renders_legend_and_labels() {
        let chart = BalanceTrend::default().into_chart();
        let mut term = TestTerminal::with_size(60, 10);
        let area = term.area();
        term.render_widget(TrendChart::new(&chart), area);

        assert!(term.buffer_contains("Savings"));
        assert!(term.buffer_contains("Loan Balance"));
        assert!(term.buffer_contains("Jan"));
        assert!(term.buffer_contains("Jun"));
        assert!(term.buffer_contains("█"));
    }

    #[test]
    fn test_tallest_bar_reaches_top_row() {
        let chart = BalanceTrend::default().into_chart();
        let mut term = TestTerminal::with_size(60, 10);
        let area = term.area();
        term.render_widget(TrendChart::new(&chart), area);

        // June savings is the maximum: the last group's first bar fills row 1
        let x = 5 * 10;
        assert_eq!(term.buffer().cell((x, 1)).unwrap().symbol(), "█");
    }

    #[test]
    fn test_empty_chart_renders_placeholder() {
        let chart = ChartData::default();
        let mut term = TestTerminal::with_size(20, 5);
        let area = term.area();
        term.render_widget(TrendChart::new(&chart), area);
        assert!(term.buffer_contains("No data"));
    }

    #[test]
    fn test_distribution_shows_currency_values() {
        let stats = DashboardStats {
            total_loan_amount: 25_000,
            total_pending_amount: 18_000,
            active_loan_count: 3,
            pending_application_count: 2,
        };
        let chart = financial_distribution(&stats, 50_000);
        let mut term = TestTerminal::with_size(70, 6);
        let area = term.area();
        term.render_widget(DistributionBars::new(&chart), area);

        assert!(term.buffer_contains("Available Credit"));
        assert!(term.buffer_contains("$25,000.00"));
        assert!(term.buffer_contains("$7,000.00"));
    }
}
