//! Session and navigation shell transitions

use sacco_core::prelude::*;
use sacco_core::{CredentialCheck, Destination, Route};

use crate::form::FormValues;
use crate::state::{AppState, Focus, LoanScreenState, MenuEntry};

use super::{UpdateAction, UpdateResult};

/// Apply a credential check to the submitted login values
pub(crate) fn handle_login(state: &mut AppState, values: FormValues) -> UpdateResult {
    let username = values.get("username").unwrap_or_default();
    let password = values.get("password").unwrap_or_default();

    match state.credentials.check(username, password) {
        CredentialCheck::Accepted => {
            info!("Login accepted for '{}'", username);
            state.session.accept();
            state.next_session_epoch();
            state.router.reset(Route::To(Destination::Dashboard));
            state.sidebar.highlight(Destination::Dashboard);
            state.focus = Focus::Sidebar;
            state.notifications.success("Login successful!");
            state.dashboard.begin_load();
            UpdateResult::action(UpdateAction::LoadDashboard)
        }
        rejected => {
            if let Err(e) = rejected.into_result() {
                warn!("Login rejected for '{}': {}", username, e);
                state.notifications.error(e.to_string());
            }
            UpdateResult::none()
        }
    }
}

pub(crate) fn handle_logout(state: &mut AppState) -> UpdateResult {
    if !state.is_authenticated() {
        return UpdateResult::none();
    }

    info!(
        "Logout from {}",
        state
            .session
            .destination()
            .map(|d| d.path())
            .unwrap_or("/")
    );
    state.session.logout();
    state.next_session_epoch();
    state.router.reset(Route::Root);
    state.reset_screens();
    state.notifications.success("Logged out successfully!");
    UpdateResult::none()
}

/// Mount `destination`, recording the route change
pub(crate) fn navigate_to(state: &mut AppState, destination: Destination) -> UpdateResult {
    let Some(current) = state.session.destination() else {
        debug!("Ignoring navigation to {} while logged out", destination.path());
        return UpdateResult::none();
    };

    state.sidebar.highlight(destination);
    if current == destination {
        return UpdateResult::none();
    }

    leave(state, current);
    state.router.navigate(Route::To(destination));
    state.session.select(destination);
    info!("Navigated to {}", destination.path());
    enter(state, destination)
}

pub(crate) fn navigate_back(state: &mut AppState) -> UpdateResult {
    let Some(current) = state.session.destination() else {
        return UpdateResult::none();
    };
    let Some(route) = state.router.back() else {
        debug!("No history to go back to");
        return UpdateResult::none();
    };

    let destination = route.destination().unwrap_or(Destination::Dashboard);
    leave(state, current);
    state.session.select(destination);
    state.sidebar.highlight(destination);
    info!("Navigated back to {}", destination.path());
    enter(state, destination)
}

pub(crate) fn menu_activate(state: &mut AppState) -> UpdateResult {
    match state.sidebar.highlighted() {
        MenuEntry::Destination(destination) => navigate_to(state, destination),
        MenuEntry::Logout => handle_logout(state),
    }
}

pub(crate) fn toggle_sidebar(state: &mut AppState) -> UpdateResult {
    state.sidebar.collapsed = !state.sidebar.collapsed;
    // Expanding hands the keyboard to the menu
    state.focus = if state.sidebar.collapsed {
        Focus::Content
    } else {
        Focus::Sidebar
    };
    debug!("Sidebar collapsed: {}", state.sidebar.collapsed);
    UpdateResult::none()
}

pub(crate) fn focus_sidebar(state: &mut AppState) -> UpdateResult {
    state.sidebar.collapsed = false;
    state.focus = Focus::Sidebar;
    UpdateResult::none()
}

pub(crate) fn focus_content(state: &mut AppState) -> UpdateResult {
    state.focus = Focus::Content;
    UpdateResult::none()
}

// Per-screen state of the loan screen lives only while it is mounted.
fn leave(state: &mut AppState, destination: Destination) {
    match destination {
        Destination::LoanManagement => state.loans = LoanScreenState::default(),
        Destination::ProfileManagement => state.profile.upload = None,
        Destination::Dashboard => {}
    }
}

fn enter(state: &mut AppState, destination: Destination) -> UpdateResult {
    match destination {
        Destination::Dashboard => {
            state.dashboard.begin_load();
            UpdateResult::action(UpdateAction::LoadDashboard)
        }
        Destination::LoanManagement => {
            state.loans.begin_load();
            UpdateResult::action(UpdateAction::LoadLoanPortfolio)
        }
        Destination::ProfileManagement => UpdateResult::none(),
    }
}
