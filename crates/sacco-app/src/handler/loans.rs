//! Loan management: table, detail modal and application form

use sacco_core::prelude::*;
use sacco_core::{Destination, LoanRecord};

use crate::form::FormValues;
use crate::selection::DetailSink;
use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

fn on_loan_screen(state: &AppState) -> bool {
    state.session.destination() == Some(Destination::LoanManagement)
}

pub(crate) fn handle_refresh(state: &mut AppState) -> UpdateResult {
    if !on_loan_screen(state) {
        return UpdateResult::none();
    }
    state.loans.detail.on_close();
    state.loans.begin_load();
    UpdateResult::action(UpdateAction::LoadLoanPortfolio)
}

pub(crate) fn handle_loaded(state: &mut AppState, epoch: u64, loans: Vec<LoanRecord>) -> UpdateResult {
    if !state.is_current_session(epoch) || !on_loan_screen(state) {
        debug!("Dropping loan portfolio for an unmounted screen");
        return UpdateResult::none();
    }
    info!("Loan portfolio loaded: {} loans", loans.len());
    state.loans.apply(loans);
    UpdateResult::none()
}

pub(crate) fn handle_load_failed(state: &mut AppState, epoch: u64, error: String) -> UpdateResult {
    if !state.is_current_session(epoch) || !on_loan_screen(state) {
        debug!("Dropping loan portfolio failure: {}", error);
        return UpdateResult::none();
    }
    warn!("Loan portfolio load failed: {}", error);
    state.notifications.error(format!("Failed to load loans: {}", error));
    state.loans.fail(error);
    UpdateResult::none()
}

pub(crate) fn handle_cursor_up(state: &mut AppState) -> UpdateResult {
    state.loans.table.cursor_up();
    UpdateResult::none()
}

pub(crate) fn handle_cursor_down(state: &mut AppState) -> UpdateResult {
    state.loans.table.cursor_down();
    UpdateResult::none()
}

/// Row action: surface the highlighted loan in the detail modal
pub(crate) fn handle_view_details(state: &mut AppState) -> UpdateResult {
    let loans = &mut state.loans;
    if loans.loading || !loans.table.activate(&mut loans.detail) {
        return UpdateResult::none();
    }
    if let Some(loan) = loans.detail.selected() {
        debug!("Showing details of {}", loan.loan_number);
    }
    UpdateResult::none()
}

pub(crate) fn handle_close_details(state: &mut AppState) -> UpdateResult {
    state.loans.detail.on_close();
    UpdateResult::none()
}

pub(crate) fn handle_open_application(state: &mut AppState) -> UpdateResult {
    if on_loan_screen(state) {
        state.open_loan_application();
    }
    UpdateResult::none()
}

pub(crate) fn handle_application_submitted(state: &mut AppState, values: FormValues) -> UpdateResult {
    info!(
        "Loan application captured: {} for {}",
        values.get("loanAmount").unwrap_or_default(),
        values.get("purpose").unwrap_or_default()
    );
    state
        .notifications
        .success("Loan application submitted successfully!");
    state.loans.application = None;
    UpdateResult::none()
}
