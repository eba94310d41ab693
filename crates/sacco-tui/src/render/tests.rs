//! Full-view rendering tests

use sacco_app::{update, AppState, FormId, Message};
use sacco_core::Destination;
use sacco_store::fixtures::builtin_portfolio;

use crate::test_utils::{logged_in_state, TestTerminal};
use crate::widgets::EMPTY_LOANS_TEXT;

fn on_loans() -> AppState {
    let mut state = logged_in_state();
    update(&mut state, Message::SelectMenu(Destination::LoanManagement));
    let epoch = state.session_epoch;
    update(
        &mut state,
        Message::LoansLoaded {
            epoch,
            loans: builtin_portfolio(),
        },
    );
    state
}

#[test]
fn test_logged_out_renders_only_login() {
    let mut state = AppState::new();
    let mut term = TestTerminal::new();
    term.draw_state(&mut state);

    assert!(term.buffer_contains("Username:"));
    assert!(!term.buffer_contains("Loan Management"));
    assert!(!term.buffer_contains("Logout"));
}

#[test]
fn test_rejected_login_shows_toast() {
    let mut state = AppState::new();
    state.login_form.set_value("username", "user");
    state.login_form.set_value("password", "wrong");
    update(&mut state, Message::FormSubmit(FormId::Login));

    let mut term = TestTerminal::new();
    term.draw_state(&mut state);
    assert!(term.buffer_contains("Password is incorrect!"));
    assert!(term.buffer_contains("Username:"));
}

#[test]
fn test_dashboard_shell() {
    let mut state = logged_in_state();
    let mut term = TestTerminal::new();
    term.draw_state(&mut state);

    assert!(term.buffer_contains("/dashboard"));
    assert!(term.buffer_contains("Profile Management"));
    assert!(term.buffer_contains("Welcome, John Doe"));
    assert!(!term.buffer_contains(EMPTY_LOANS_TEXT));
}

#[test]
fn test_dashboard_spinner_while_loading() {
    let mut state = logged_in_state();
    update(&mut state, Message::FocusContent);
    update(&mut state, Message::RefreshDashboard);

    let mut term = TestTerminal::new();
    term.draw_state(&mut state);
    assert!(term.buffer_contains("Loading dashboard..."));
    assert!(!term.buffer_contains("Total Active Loans"));
}

#[test]
fn test_collapsed_sidebar_hides_menu() {
    let mut state = logged_in_state();
    update(&mut state, Message::ToggleSidebar);

    let mut term = TestTerminal::new();
    term.draw_state(&mut state);
    assert!(!term.buffer_contains("SACCO Portal"));
    assert!(term.buffer_contains("/dashboard"));
}

#[test]
fn test_loan_table_and_detail_modal() {
    let mut state = on_loans();
    let mut term = TestTerminal::with_size(180, 40);
    term.draw_state(&mut state);
    assert!(term.buffer_contains("LN003"));
    assert!(!term.buffer_contains("Loan Details -"));

    update(&mut state, Message::LoanCursorDown);
    update(&mut state, Message::ViewLoanDetails);
    term.draw_state(&mut state);
    assert!(term.buffer_contains("Loan Details - LN002"));

    update(&mut state, Message::CloseLoanDetails);
    term.draw_state(&mut state);
    assert!(!term.buffer_contains("Loan Details -"));
}

#[test]
fn test_loan_application_modal() {
    let mut state = on_loans();
    update(&mut state, Message::OpenLoanApplication);

    let mut term = TestTerminal::with_size(120, 40);
    term.draw_state(&mut state);
    assert!(term.buffer_contains("Apply for a New Loan"));
    assert!(term.buffer_contains("Personal Information"));
}

#[test]
fn test_profile_screen_and_upload_modal() {
    let mut state = logged_in_state();
    update(&mut state, Message::SelectMenu(Destination::ProfileManagement));

    let mut term = TestTerminal::new();
    term.draw_state(&mut state);
    assert!(term.buffer_contains("/profile-management"));
    assert!(term.buffer_contains("Full Name:"));

    update(&mut state, Message::OpenImageUpload);
    term.draw_state(&mut state);
    assert!(term.buffer_contains("Upload Profile Picture"));
}
