//! Toast stack in the top-right corner

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Widget},
};
use unicode_width::UnicodeWidthStr;

use sacco_app::notifications::Notifications;

use crate::theme::{palette, styles};

/// Most toasts drawn at once, newest on top
pub const VISIBLE_TOASTS: usize = 3;

const MAX_WIDTH: u16 = 48;

pub struct Toasts<'a> {
    notifications: &'a Notifications,
}

impl<'a> Toasts<'a> {
    pub fn new(notifications: &'a Notifications) -> Self {
        Self { notifications }
    }
}

impl Widget for Toasts<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let newest_first = self
            .notifications
            .iter()
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .take(VISIBLE_TOASTS);

        let mut y = area.y;
        for notification in newest_first {
            if y + 3 > area.bottom() {
                break;
            }
            let (icon, style) = styles::notification(notification.level);
            let width = (notification.message.width() as u16 + 6)
                .min(MAX_WIDTH)
                .min(area.width);
            let rect = Rect::new(area.right() - width, y, width, 3);

            Clear.render(rect, buf);
            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(style)
                .style(Style::default().bg(palette::POPUP_BG));
            let inner = block.inner(rect);
            block.render(rect, buf);

            let line = Line::from(vec![
                Span::styled(format!("{} ", icon), style),
                Span::styled(notification.message.as_str(), styles::text_primary()),
            ]);
            buf.set_line(inner.x, inner.y, &line, inner.width);
            y += 3;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use std::time::Duration;

    #[test]
    fn test_latest_toasts_render() {
        let mut notifications = Notifications::new(Duration::from_secs(3));
        notifications.success("Login successful!");
        notifications.error("Password is incorrect!");

        let mut term = TestTerminal::with_size(80, 10);
        let area = term.area();
        term.render_widget(Toasts::new(&notifications), area);

        assert!(term.buffer_contains("Login successful!"));
        assert!(term.buffer_contains("Password is incorrect!"));
    }

    #[test]
    fn test_only_newest_visible() {
        let mut notifications = Notifications::new(Duration::from_secs(3));
        for i in 0..5 {
            notifications.info(format!("note {i}"));
        }
        let mut term = TestTerminal::with_size(80, 20);
        let area = term.area();
        term.render_widget(Toasts::new(&notifications), area);

        assert!(term.buffer_contains("note 4"));
        assert!(term.buffer_contains("note 2"));
        assert!(!term.buffer_contains("note 1"));
    }

    #[test]
    fn test_empty_renders_nothing() {
        let notifications = Notifications::new(Duration::from_secs(3));
        let mut term = TestTerminal::with_size(40, 5);
        let area = term.area();
        term.render_widget(Toasts::new(&notifications), area);
        assert!(!term.buffer_contains("│"));
    }
}
