//! Profile management: avatar panel and the profile form

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use sacco_app::state::ProfileState;

use super::dashboard::spinner_frame;
use super::form_view::FormView;
use crate::theme::styles;

const AVATAR_WIDTH: u16 = 28;

pub struct ProfileView<'a> {
    state: &'a ProfileState,
    focused: bool,
    tick: u64,
}

impl<'a> ProfileView<'a> {
    pub fn new(state: &'a ProfileState) -> Self {
        Self {
            state,
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

    fn avatar_lines(&self) -> Vec<Line<'_>> {
        let mut lines = vec![match &self.state.avatar {
            Some(name) => Line::styled(format!("◆ {}", name), styles::text_primary()),
            None => Line::styled("No image uploaded", styles::text_muted()),
        }];
        lines.push(Line::default());
        if self.state.uploading {
            lines.push(Line::from(vec![
                Span::styled(spinner_frame(self.tick), styles::accent_bold()),
                Span::styled(" Uploading...", styles::text_secondary()),
            ]));
        } else {
            lines.push(Line::from(vec![
                Span::styled("Ctrl+O", styles::keybinding()),
                Span::styled(" upload", styles::text_muted()),
            ]));
        }
        lines
    }
}

impl Widget for ProfileView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [avatar_area, form_area] =
            Layout::horizontal([Constraint::Length(AVATAR_WIDTH), Constraint::Min(0)])
                .areas(area);

        let avatar_block = styles::glass_block(false).title(" Profile Picture ");
        let inner = avatar_block.inner(avatar_area);
        avatar_block.render(avatar_area, buf);
        Paragraph::new(self.avatar_lines())
            .wrap(Wrap { trim: true })
            .render(inner, buf);

        let form_block = styles::glass_block(self.focused).title(" Profile Management ");
        let inner = form_block.inner(form_area);
        form_block.render(form_area, buf);

        let [form, hint] = Layout::vertical([Constraint::Min(1), Constraint::Length(1)])
            .areas(Rect::new(
                inner.x + 1,
                inner.y,
                inner.width.saturating_sub(2),
                inner.height,
            ));
        FormView::new(&self.state.form)
            .focused(self.focused)
            .render(form, buf);
        buf.set_stringn(
            hint.x,
            hint.y,
            "Enter update profile · Esc cancel",
            hint.width as usize,
            styles::text_muted(),
        );
    }
}
