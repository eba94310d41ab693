//! Header bar: sidebar toggle and the current route path

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

use sacco_core::Route;

use crate::theme::styles;

pub struct Header {
    route: Route,
    sidebar_collapsed: bool,
}

impl Header {
    pub fn new(route: Route, sidebar_collapsed: bool) -> Self {
        Self {
            route,
            sidebar_collapsed,
        }
    }

    fn toggle_icon(&self) -> &'static str {
        if self.sidebar_collapsed {
            "☰"
        } else {
            "«"
        }
    }
}

impl Widget for Header {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let left = Line::from(vec![
            Span::styled(format!(" {} ", self.toggle_icon()), styles::accent_bold()),
            Span::styled("Ctrl+B", styles::keybinding()),
            Span::styled("  │  ", styles::text_muted()),
            Span::styled(self.route.path(), styles::text_primary()),
        ]);
        buf.set_line(inner.x, inner.y, &left, inner.width);

        let hint = "Ctrl+L logout · Ctrl+C quit ";
        let hint_width = hint.width() as u16;
        if inner.width > left.width() as u16 + hint_width {
            buf.set_string(
                inner.right() - hint_width,
                inner.y,
                hint,
                styles::text_muted(),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use sacco_core::Destination;

    #[test]
    fn test_header_shows_route_path() {
        let mut term = TestTerminal::with_size(80, 3);
        let area = term.area();
        term.render_widget(
            Header::new(Route::To(Destination::LoanManagement), false),
            area,
        );
        assert!(term.buffer_contains("/loan-management"));
        assert!(term.buffer_contains("«"));
        assert!(term.buffer_contains("Ctrl+L logout"));
    }

    #[test]
    fn test_header_toggle_reflects_collapse() {
        let mut term = TestTerminal::with_size(80, 3);
        let area = term.area();
        term.render_widget(Header::new(Route::To(Destination::Dashboard), true), area);
        assert!(term.buffer_contains("☰"));
    }

    #[test]
    fn test_narrow_header_drops_hint() {
        let mut term = TestTerminal::with_size(30, 3);
        let area = term.area();
        term.render_widget(Header::new(Route::To(Destination::Dashboard), false), area);
        assert!(term.buffer_contains("/dashboard"));
        assert!(!term.buffer_contains("logout"));
    }
}
