//! Credential surface shown while logged out

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Margin, Rect},
    text::Line,
    widgets::{Paragraph, Widget},
};

use sacco_app::form::FormState;

use super::form_view::FormView;
use super::modal_overlay::centered_rect;
use crate::theme::styles;

const CARD_WIDTH: u16 = 56;
const CARD_HEIGHT: u16 = 12;

pub struct LoginScreen<'a> {
    form: &'a FormState,
}

impl<'a> LoginScreen<'a> {
    pub fn new(form: &'a FormState) -> Self {
        Self { form }
    }
}

impl Widget for LoginScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let card = centered_rect(CARD_WIDTH, CARD_HEIGHT, area);
        let block = styles::glass_block(true).title(Line::styled(" Login ", styles::accent_bold()));
        let inner = block.inner(card);
        block.render(card, buf);

        let [title, _, form, hint] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(2),
            Constraint::Length(1),
        ])
        .areas(inner.inner(Margin::new(1, 0)));

        Paragraph::new(Line::styled("SACCO Member Portal", styles::title()))
            .alignment(Alignment::Center)
            .render(title, buf);

        FormView::new(self.form).render(form, buf);

        Paragraph::new(Line::styled(
            "Enter log in · Tab next field · Ctrl+C quit",
            styles::text_muted(),
        ))
        .alignment(Alignment::Center)
        .render(hint, buf);
    }
}
