//! Sidebar menu

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Widget},
};

use sacco_app::state::{MenuEntry, SidebarState};
use sacco_core::Destination;

use crate::theme::{palette, styles};

pub struct Sidebar<'a> {
    state: &'a SidebarState,
    active: Option<Destination>,
    focused: bool,
}

impl<'a> Sidebar<'a> {
    pub fn new(state: &'a SidebarState, active: Option<Destination>) -> Self {
        Self {
            state,
            active,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn entry_style(&self, index: usize, entry: MenuEntry) -> Style {
        if index == self.state.cursor {
            if self.focused {
                return styles::focused_selected();
            }
            return styles::unfocused_selected();
        }
        match entry {
            MenuEntry::Destination(d) if Some(d) == self.active => styles::accent(),
            _ => styles::text_secondary(),
        }
    }
}

impl Widget for Sidebar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 {
            return;
        }

        let block = Block::default()
            .borders(Borders::RIGHT)
            .border_style(Style::default().fg(if self.focused {
                palette::BORDER_ACTIVE
            } else {
                palette::BORDER_DIM
            }))
            .style(Style::default().bg(palette::SIDEBAR_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height < 3 {
            return;
        }

        buf.set_string(inner.x + 1, inner.y + 1, "SACCO Portal", styles::accent_bold());

        for (index, entry) in MenuEntry::ALL.into_iter().enumerate() {
            let y = inner.y + 3 + index as u16;
            if y >= inner.bottom() {
                break;
            }
            let marker = match entry {
                MenuEntry::Destination(d) if Some(d) == self.active => "●",
                _ => " ",
            };
            let style = self.entry_style(index, entry);
            let line = Line::from(vec![
                Span::styled(format!(" {} ", marker), style),
                Span::styled(format!("{} ", entry.key()), style.patch(styles::keybinding())),
                Span::styled(entry.label(), style),
            ]);
            let row = Rect::new(inner.x, y, inner.width, 1);
            buf.set_style(row, style);
            buf.set_line(row.x, row.y, &line, row.width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_sidebar_lists_every_entry() {
        let state = SidebarState::default();
        let mut term = TestTerminal::with_size(24, 10);
        let area = term.area();
        term.render_widget(Sidebar::new(&state, Some(Destination::Dashboard)), area);

        for label in ["Dashboard", "Loan Management", "Profile Management", "Logout"] {
            assert!(term.buffer_contains(label), "missing {label}");
        }
        assert!(term.buffer_contains("● 1 Dashboard"));
    }

    #[test]
    fn test_focused_cursor_row_is_highlighted() {
        let mut state = SidebarState::default();
        state.highlight(Destination::LoanManagement);
        let mut term = TestTerminal::with_size(24, 10);
        let area = term.area();
        term.render_widget(
            Sidebar::new(&state, Some(Destination::Dashboard)).focused(true),
            area,
        );

        // Menu row 1 sits at y = 3 + 1
        let cell = term.buffer().cell((5, 4)).unwrap();
        assert_eq!(cell.bg, palette::ACCENT);
    }

    #[test]
    fn test_zero_width_renders_nothing() {
        let state = SidebarState::default();
        let mut term = TestTerminal::with_size(24, 10);
        term.render_widget(
            Sidebar::new(&state, None),
            Rect::new(0, 0, 0, 10),
        );
        assert!(!term.buffer_contains("Dashboard"));
    }
}
