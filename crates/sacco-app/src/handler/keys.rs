//! Key event handlers for different UI modes

use sacco_core::Destination;

use crate::input_key::InputKey;
use crate::message::{FormEdit, FormId, Message};
use crate::state::{AppState, Focus, UiMode};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Force quit from anywhere
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    match state.ui_mode() {
        UiMode::Login => handle_key_form(FormId::Login, key),
        UiMode::LoanDetails => handle_key_loan_details(key),
        UiMode::LoanApplication => handle_key_form(FormId::LoanApplication, key),
        UiMode::ImageUpload => handle_key_form(FormId::ImageUpload, key),
        UiMode::Shell => handle_key_shell(state, key),
    }
}

/// Shared editing keys of every form
fn handle_key_form(form: FormId, key: InputKey) -> Option<Message> {
    let edit = match key {
        InputKey::Enter => return Some(Message::FormSubmit(form)),
        InputKey::Esc => return Some(Message::FormCancel(form)),
        InputKey::Tab | InputKey::Down => FormEdit::NextField,
        InputKey::BackTab | InputKey::Up => FormEdit::PrevField,
        InputKey::Right => FormEdit::ChoiceNext,
        InputKey::Left => FormEdit::ChoicePrev,
        InputKey::Backspace => FormEdit::Backspace,
        InputKey::CharCtrl('u') => FormEdit::Clear,
        InputKey::Char(c) if key.printable().is_some() => FormEdit::Insert(c),
        _ => return None,
    };
    Some(Message::FormInput { form, edit })
}

fn handle_key_loan_details(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc | InputKey::Enter => Some(Message::CloseLoanDetails),
        _ => None,
    }
}

fn handle_key_shell(state: &AppState, key: InputKey) -> Option<Message> {
    // Shell-wide shortcuts
    match key {
        InputKey::CharCtrl('b') => return Some(Message::ToggleSidebar),
        InputKey::CharCtrl('l') => return Some(Message::Logout),
        _ => {}
    }

    match state.focus {
        Focus::Sidebar if !state.sidebar.collapsed => handle_key_sidebar(key),
        _ => match state.session.destination() {
            Some(Destination::Dashboard) => handle_key_dashboard(key),
            Some(Destination::LoanManagement) => handle_key_loans(key),
            Some(Destination::ProfileManagement) => handle_key_profile(key),
            None => None,
        },
    }
}

fn handle_key_sidebar(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Up | InputKey::Char('k') => Some(Message::MenuUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::MenuDown),
        InputKey::Enter => Some(Message::MenuActivate),
        InputKey::Char('4') => Some(Message::Logout),
        InputKey::Char(c) => Destination::from_menu_key(c).map(Message::SelectMenu),
        InputKey::Backspace => Some(Message::NavigateBack),
        InputKey::Tab | InputKey::Right => Some(Message::FocusContent),
        _ => None,
    }
}

fn handle_key_dashboard(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc | InputKey::Tab | InputKey::Left => Some(Message::FocusSidebar),
        InputKey::Char('r') => Some(Message::RefreshDashboard),
        InputKey::Up | InputKey::Char('k') => Some(Message::DashboardCursorUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::DashboardCursorDown),
        InputKey::Enter => Some(Message::OpenActiveLoan),
        InputKey::Backspace => Some(Message::NavigateBack),
        _ => None,
    }
}

fn handle_key_loans(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc | InputKey::Tab | InputKey::Left => Some(Message::FocusSidebar),
        InputKey::Char('r') => Some(Message::RefreshLoans),
        InputKey::Up | InputKey::Char('k') => Some(Message::LoanCursorUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::LoanCursorDown),
        InputKey::Enter | InputKey::Char('v') => Some(Message::ViewLoanDetails),
        InputKey::Char('a') => Some(Message::OpenLoanApplication),
        InputKey::Backspace => Some(Message::NavigateBack),
        _ => None,
    }
}

/// The profile form owns the content pane; Esc cancels the edit
fn handle_key_profile(key: InputKey) -> Option<Message> {
    match key {
        InputKey::CharCtrl('o') => Some(Message::OpenImageUpload),
        _ => handle_key_form(FormId::Profile, key),
    }
}
