//! Dashboard load handling

use sacco_core::prelude::*;
use sacco_core::Destination;
use sacco_store::DashboardSnapshot;

use crate::state::AppState;

use super::{navigation, UpdateAction, UpdateResult};

pub(crate) fn handle_refresh(state: &mut AppState) -> UpdateResult {
    if state.session.destination() != Some(Destination::Dashboard) {
        return UpdateResult::none();
    }
    state.dashboard.begin_load();
    UpdateResult::action(UpdateAction::LoadDashboard)
}

pub(crate) fn handle_loaded(
    state: &mut AppState,
    epoch: u64,
    snapshot: DashboardSnapshot,
) -> UpdateResult {
    if !state.is_current_session(epoch) {
        debug!("Dropping dashboard snapshot from session epoch {}", epoch);
        return UpdateResult::none();
    }

    state.dashboard.apply(snapshot);
    info!(
        "Dashboard loaded: {} active loans, {} pending applications",
        state.dashboard.stats.active_loan_count, state.dashboard.stats.pending_application_count
    );
    UpdateResult::none()
}

pub(crate) fn handle_load_failed(state: &mut AppState, epoch: u64, error: String) -> UpdateResult {
    if !state.is_current_session(epoch) {
        debug!("Dropping dashboard failure from session epoch {}: {}", epoch, error);
        return UpdateResult::none();
    }
    warn!("Dashboard load failed: {}", error);
    state.notifications.error(format!("Failed to load dashboard: {}", error));
    state.dashboard.fail(error);
    UpdateResult::none()
}

/// Active loan entries link to the loan management screen
pub(crate) fn handle_open_active_loan(state: &mut AppState) -> UpdateResult {
    if state.dashboard.active_loans().is_empty() {
        return UpdateResult::none();
    }
    navigation::navigate_to(state, Destination::LoanManagement)
}
