//! Main update function - handles state transitions (TEA pattern)

use std::time::Instant;

use crate::message::Message;
use crate::state::AppState;

use super::{dashboard, forms, keys::handle_key, loans, navigation, profile, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => {
            state.tick_count = state.tick_count.wrapping_add(1);
            state.notifications.expire(Instant::now());
            UpdateResult::none()
        }

        Message::Quit => {
            tracing::info!("Quit requested");
            state.request_quit();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Session / Navigation Shell
        // ─────────────────────────────────────────────────────────
        Message::Logout => navigation::handle_logout(state),
        Message::SelectMenu(destination) => navigation::navigate_to(state, destination),
        Message::NavigateBack => navigation::navigate_back(state),
        Message::ToggleSidebar => navigation::toggle_sidebar(state),
        Message::FocusSidebar => navigation::focus_sidebar(state),
        Message::FocusContent => navigation::focus_content(state),
        Message::MenuUp => {
            state.sidebar.cursor_up();
            UpdateResult::none()
        }
        Message::MenuDown => {
            state.sidebar.cursor_down();
            UpdateResult::none()
        }
        Message::MenuActivate => navigation::menu_activate(state),

        // ─────────────────────────────────────────────────────────
        // Forms
        // ─────────────────────────────────────────────────────────
        Message::FormInput { form, edit } => forms::handle_form_input(state, form, edit),
        Message::FormSubmit(form) => forms::handle_form_submit(state, form),
        Message::FormCancel(form) => forms::handle_form_cancel(state, form),

        // ─────────────────────────────────────────────────────────
        // Dashboard
        // ─────────────────────────────────────────────────────────
        Message::RefreshDashboard => dashboard::handle_refresh(state),
        Message::DashboardLoaded { epoch, snapshot } => {
            dashboard::handle_loaded(state, epoch, *snapshot)
        }
        Message::DashboardLoadFailed { epoch, error } => {
            dashboard::handle_load_failed(state, epoch, error)
        }
        Message::DashboardCursorUp => {
            state.dashboard.cursor_up();
            UpdateResult::none()
        }
        Message::DashboardCursorDown => {
            state.dashboard.cursor_down();
            UpdateResult::none()
        }
        Message::OpenActiveLoan => dashboard::handle_open_active_loan(state),

        // ─────────────────────────────────────────────────────────
        // Loan Management
        // ─────────────────────────────────────────────────────────
        Message::RefreshLoans => loans::handle_refresh(state),
        Message::LoansLoaded {
            epoch,
            loans: records,
        } => loans::handle_loaded(state, epoch, records),
        Message::LoansLoadFailed { epoch, error } => loans::handle_load_failed(state, epoch, error),
        Message::LoanCursorUp => loans::handle_cursor_up(state),
        Message::LoanCursorDown => loans::handle_cursor_down(state),
        Message::ViewLoanDetails => loans::handle_view_details(state),
        Message::CloseLoanDetails => loans::handle_close_details(state),
        Message::OpenLoanApplication => loans::handle_open_application(state),

        // ─────────────────────────────────────────────────────────
        // Profile
        // ─────────────────────────────────────────────────────────
        Message::OpenImageUpload => profile::handle_open_upload(state),
        Message::ImageUploaded { epoch, receipt } => profile::handle_uploaded(state, epoch, receipt),
        Message::ImageUploadFailed {
            epoch,
            file,
            reason,
        } => profile::handle_upload_failed(state, epoch, file, reason),
    }
}
