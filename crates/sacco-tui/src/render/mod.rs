//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use sacco_app::state::{AppState, Focus, UiMode};
use sacco_app::Screen;

use super::{layout, widgets};
use crate::theme::{palette, styles};

/// Render the complete UI (View function in TEA)
///
/// Reads the state only; `&mut` matches the draw closure of the runner.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(palette::DEEPEST_BG)),
        area,
    );

    match state.screen() {
        Screen::Login => frame.render_widget(widgets::LoginScreen::new(&state.login_form), area),
        screen => render_shell(frame, state, screen, area),
    }

    let toast_area = Rect::new(area.x, area.y + 1, area.width.saturating_sub(1), area.height);
    frame.render_widget(widgets::Toasts::new(&state.notifications), toast_area);
}

fn render_shell(frame: &mut Frame, state: &AppState, screen: Screen, area: Rect) {
    let areas = layout::create(area, state.sidebar.collapsed);
    let content_focused = state.focus == Focus::Content || state.sidebar.collapsed;

    frame.render_widget(
        widgets::Sidebar::new(&state.sidebar, state.session.destination())
            .focused(!content_focused),
        areas.sidebar,
    );
    frame.render_widget(
        widgets::Header::new(state.current_route(), state.sidebar.collapsed),
        areas.header,
    );

    match screen {
        Screen::Dashboard => frame.render_widget(
            widgets::DashboardView::new(&state.dashboard, &state.member, state.credit_limit())
                .focused(content_focused)
                .tick(state.tick_count),
            areas.content,
        ),
        Screen::LoanManagement => render_loans(frame, state, content_focused, areas.content),
        Screen::ProfileManagement => frame.render_widget(
            widgets::ProfileView::new(&state.profile)
                .focused(content_focused)
                .tick(state.tick_count),
            areas.content,
        ),
        Screen::Login => {}
    }

    // Modals over the shell
    match state.ui_mode() {
        UiMode::LoanDetails => {
            if let Some(loan) = state.loans.detail.selected() {
                frame.render_widget(widgets::LoanDetails::new(loan), area);
            }
        }
        UiMode::LoanApplication => {
            if let Some(form) = &state.loans.application {
                frame.render_widget(widgets::FormModal::new("Apply for a New Loan", form), area);
            }
        }
        UiMode::ImageUpload => {
            if let Some(form) = &state.profile.upload {
                frame.render_widget(
                    widgets::FormModal::new("Upload Profile Picture", form),
                    area,
                );
            }
        }
        UiMode::Login | UiMode::Shell => {}
    }
}

fn render_loans(frame: &mut Frame, state: &AppState, focused: bool, area: Rect) {
    let [hint, table] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(3)]).areas(area);

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(" a", styles::keybinding()),
            Span::styled(" Apply for a New Loan   ", styles::text_secondary()),
            Span::styled("Enter", styles::keybinding()),
            Span::styled(" View Details   ", styles::text_secondary()),
            Span::styled("r", styles::keybinding()),
            Span::styled(" refresh", styles::text_secondary()),
        ])),
        hint,
    );

    if state.loans.loading {
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(widgets::spinner_frame(state.tick_count), styles::accent_bold()),
                Span::styled(" Loading loans...", styles::text_secondary()),
            ]))
            .alignment(Alignment::Center)
            .block(styles::glass_block(focused)),
            table,
        );
        return;
    }

    let empty_text = match &state.loans.error {
        Some(_) => "Could not load loans. Press r to retry.",
        None => "No loans found",
    };
    frame.render_widget(
        widgets::RecordTableView::new(&state.loans.table, "Loan Management")
            .focused(focused)
            .empty_text(empty_text),
        table,
    );
}
