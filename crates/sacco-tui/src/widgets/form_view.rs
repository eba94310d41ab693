//! Renders a [`FormState`]: section headings, one input row per field and
//! inline error rows under flagged fields.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

use sacco_app::form::{FieldKind, FieldSpec, FormState};

use crate::theme::styles;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Row {
    Section(&'static str),
    Field(usize),
    Error(&'static str),
}

pub struct FormView<'a> {
    form: &'a FormState,
    focused: bool,
}

impl<'a> FormView<'a> {
    pub fn new(form: &'a FormState) -> Self {
        Self {
            form,
            focused: true,
        }
    }

    /// Whether keys currently go to this form
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn rows(&self) -> Vec<Row> {
        let mut rows = Vec::new();
        for (index, spec) in self.form.fields().iter().enumerate() {
            if let Some(section) = spec.section {
                rows.push(Row::Section(section));
            }
            rows.push(Row::Field(index));
            if let Some(message) = self.form.error(index) {
                rows.push(Row::Error(message));
            }
        }
        rows
    }

    fn label_width(&self) -> u16 {
        self.form
            .fields()
            .iter()
            .map(|spec| spec.label.width() + 4)
            .max()
            .unwrap_or(0) as u16
    }

    /// Displayed text of a field and whether it is the placeholder
    fn display_value(&self, index: usize, spec: &FieldSpec) -> (String, bool) {
        let value = self.form.value(index);
        if value.is_empty() {
            return match spec.kind {
                FieldKind::Choice(options) => (format!("‹ {} ›", options.join(" / ")), true),
                _ => (spec.placeholder.to_string(), true),
            };
        }
        match spec.kind {
            FieldKind::Secret => ("•".repeat(value.chars().count()), false),
            FieldKind::Choice(_) => (format!("‹ {} ›", value), false),
            _ => (value.to_string(), false),
        }
    }

    fn render_field(&self, index: usize, area: Rect, buf: &mut Buffer) {
        let Some(spec) = self.form.fields().get(index) else {
            return;
        };
        let is_focused = self.focused && self.form.focused() == index;
        let label_width = self.label_width().min(area.width);

        let marker = if spec.required { "* " } else { "  " };
        let label = Line::from(vec![
            Span::styled(marker, styles::error_text()),
            Span::styled(
                format!("{}:", spec.label),
                if is_focused {
                    styles::accent_bold()
                } else {
                    styles::text_secondary()
                },
            ),
        ]);
        buf.set_line(area.x, area.y, &label, label_width);

        let input = Rect::new(
            area.x + label_width,
            area.y,
            area.width.saturating_sub(label_width),
            1,
        );
        if input.width == 0 {
            return;
        }
        buf.set_style(input, styles::input(is_focused));

        let (text, placeholder) = self.display_value(index, spec);
        let style = if placeholder {
            styles::input(is_focused).patch(styles::text_muted())
        } else {
            styles::input(is_focused)
        };
        let (x, _) = buf.set_stringn(input.x + 1, input.y, &text, input.width as usize - 1, style);

        if is_focused && !spec.kind.is_choice() {
            let cursor_x = if placeholder { input.x + 1 } else { x };
            if cursor_x < input.right() {
                buf.set_string(cursor_x, input.y, "▏", styles::accent());
            }
        }
    }
}

impl Widget for FormView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let rows = self.rows();
        let focus_row = rows
            .iter()
            .position(|row| *row == Row::Field(self.form.focused()))
            .unwrap_or(0);
        // Keep the focused field and its error row on screen
        let offset = (focus_row + 2).saturating_sub(area.height as usize);

        for (line, row) in rows.iter().skip(offset).take(area.height as usize).enumerate() {
            let row_area = Rect::new(area.x, area.y + line as u16, area.width, 1);
            match *row {
                Row::Section(title) => {
                    buf.set_stringn(
                        row_area.x,
                        row_area.y,
                        title,
                        row_area.width as usize,
                        styles::title(),
                    );
                }
                Row::Field(index) => self.render_field(index, row_area, buf),
                Row::Error(message) => {
                    let indent = self.label_width().min(row_area.width);
                    buf.set_stringn(
                        row_area.x + indent + 1,
                        row_area.y,
                        message,
                        row_area.width.saturating_sub(indent + 1) as usize,
                        styles::error_text(),
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use sacco_app::form::{LOAN_APPLICATION_FIELDS, LOGIN_FIELDS, PROFILE_FIELDS};

    #[test]
    fn test_login_form_masks_password() {
        let mut form = FormState::new(LOGIN_FIELDS);
        form.set_value("username", "user");
        form.set_value("password", "secret");

        let mut term = TestTerminal::with_size(50, 4);
        let area = term.area();
        term.render_widget(FormView::new(&form), area);

        assert!(term.buffer_contains("Username:"));
        assert!(term.buffer_contains("user"));
        assert!(term.buffer_contains("••••••"));
        assert!(!term.buffer_contains("secret"));
    }

    #[test]
    fn test_inline_errors_render_under_field() {
        let mut form = FormState::new(LOGIN_FIELDS);
        form.submit();

        let mut term = TestTerminal::with_size(60, 6);
        let area = term.area();
        term.render_widget(FormView::new(&form), area);

        assert!(term.buffer_contains("Please input your username!"));
        assert!(term.buffer_contains("Please input your password!"));
    }

    #[test]
    fn test_sections_and_placeholders() {
        let form = FormState::new(LOAN_APPLICATION_FIELDS);
        let mut term = TestTerminal::with_size(80, 16);
        let area = term.area();
        term.render_widget(FormView::new(&form), area);

        assert!(term.buffer_contains("Personal Information"));
        assert!(term.buffer_contains("Next of Kin Information"));
        assert!(term.buffer_contains("Enter your full name"));
    }

    #[test]
    fn test_focused_field_scrolls_into_view() {
        let mut form = FormState::new(LOAN_APPLICATION_FIELDS);
        form.focus(10);

        let mut term = TestTerminal::with_size(80, 5);
        let area = term.area();
        term.render_widget(FormView::new(&form), area);

        assert!(term.buffer_contains("City:"));
        assert!(!term.buffer_contains("Personal Information"));
    }

    #[test]
    fn test_choice_shows_options_then_value() {
        let mut form = FormState::new(PROFILE_FIELDS);
        let mut term = TestTerminal::with_size(80, 10);
        let area = term.area();
        term.render_widget(FormView::new(&form), area);
        assert!(term.buffer_contains("‹ Male / Female / Other ›"));

        form.focus(5);
        form.cycle_choice(false);
        term.render_widget(FormView::new(&form), area);
        assert!(term.buffer_contains("‹ Other ›"));
    }
}
