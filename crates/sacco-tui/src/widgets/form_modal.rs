//! A form shown in a modal: loan application and image upload

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    widgets::Widget,
};

use sacco_app::form::FormState;

use super::form_view::FormView;
use super::modal_overlay::open_modal;
use crate::theme::styles;

const SUBMIT_HINT: &str = "Enter submit · Esc cancel · Tab next field";

pub struct FormModal<'a> {
    title: &'a str,
    form: &'a FormState,
    width: u16,
    height: u16,
}

impl<'a> FormModal<'a> {
    pub fn new(title: &'a str, form: &'a FormState) -> Self {
        // Section headings plus a spare row per field for inline errors
        let sections = form.fields().iter().filter(|f| f.section.is_some()).count();
        let rows = form.fields().len() * 2 + sections;
        Self {
            title,
            form,
            width: 76,
            height: rows as u16 + 4,
        }
    }
}

impl Widget for FormModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let inner = open_modal(buf, area, self.width, self.height, self.title);
        let [body, _, hint] = Layout::vertical([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(Rect::new(
            inner.x + 1,
            inner.y,
            inner.width.saturating_sub(2),
            inner.height,
        ));

        FormView::new(self.form).render(body, buf);
        buf.set_stringn(
            hint.x,
            hint.y,
            SUBMIT_HINT,
            hint.width as usize,
            styles::text_muted(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use sacco_app::form::{LOAN_APPLICATION_FIELDS, UPLOAD_FIELDS};

    #[test]
    fn test_application_modal() {
        let form = FormState::new(LOAN_APPLICATION_FIELDS);
        let mut term = TestTerminal::with_size(100, 40);
        let area = term.area();
        term.render_widget(FormModal::new("Apply for a New Loan", &form), area);

        assert!(term.buffer_contains("Apply for a New Loan"));
        assert!(term.buffer_contains("Borrower Name:"));
        assert!(term.buffer_contains("City:"));
        assert!(term.buffer_contains("Enter submit"));
    }

    #[test]
    fn test_upload_modal_is_compact() {
        let form = FormState::new(UPLOAD_FIELDS);
        let modal = FormModal::new("Upload Profile Picture", &form);
        assert_eq!(modal.height, 6);

        let mut term = TestTerminal::with_size(100, 20);
        let area = term.area();
        term.render_widget(modal, area);
        assert!(term.buffer_contains("/path/to/avatar.png"));
    }
}
