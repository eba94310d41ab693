//! Dashboard aggregates derived from the record store

use serde::Serialize;

use crate::records::{ApplicationRecord, LoanRecord};

/// Summary figures shown on the dashboard cards.
///
/// Always a pure function of one fully loaded record set, see [`compute_stats`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_loan_amount: u64,
    pub total_pending_amount: u64,
    pub active_loan_count: usize,
    pub pending_application_count: usize,
}

/// Aggregate loans and applications into [`DashboardStats`].
///
/// Total on every input; empty collections yield all-zero stats. Sums
/// saturate rather than wrap.
pub fn compute_stats(loans: &[LoanRecord], applications: &[ApplicationRecord]) -> DashboardStats {
    let (total_pending_amount, pending_application_count) = applications
        .iter()
        .filter(|app| app.is_pending())
        .fold((0u64, 0usize), |(sum, count), app| {
            (sum.saturating_add(app.amount), count + 1)
        });

    DashboardStats {
        total_loan_amount: loans
            .iter()
            .fold(0u64, |sum, loan| sum.saturating_add(loan.amount)),
        total_pending_amount,
        active_loan_count: loans.len(),
        pending_application_count,
    }
}
