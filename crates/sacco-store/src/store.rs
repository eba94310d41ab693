//! Record store query surface
//!
//! Callers depend on [`RecordStore`] only, so the fixture backend can be
//! swapped for a remote one without touching the app layer.

use serde::{Deserialize, Serialize};

use sacco_core::prelude::*;
use sacco_core::{compute_stats, ApplicationRecord, BalanceTrend, DashboardStats, LoanRecord};

/// Response envelope of `get_active_loans`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveLoansResponse {
    pub active_loans: Vec<LoanRecord>,
}

/// Response envelope of `get_applications`.
///
/// The collection is named `loans` on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationsResponse {
    pub loans: Vec<ApplicationRecord>,
}

/// Asynchronous query surface for loan and application data
#[trait_variant::make(RecordStore: Send)]
pub trait LocalRecordStore {
    /// Loans currently held by the signed-in member
    async fn get_active_loans(&self) -> Result<ActiveLoansResponse>;

    /// Loan applications, any status
    async fn get_applications(&self) -> Result<ApplicationsResponse>;

    /// Every loan managed through the portal
    async fn get_loan_portfolio(&self) -> Result<Vec<LoanRecord>>;

    /// Monthly savings and loan balances
    async fn get_balance_trend(&self) -> Result<BalanceTrend>;
}

/// Everything the dashboard needs, captured from one complete load.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardSnapshot {
    pub loans: Vec<LoanRecord>,
    pub applications: Vec<ApplicationRecord>,
    pub trend: BalanceTrend,
}

impl DashboardSnapshot {
    pub fn stats(&self) -> DashboardStats {
        compute_stats(&self.loans, &self.applications)
    }
}

/// Query every dashboard collection concurrently.
///
/// Resolves only once all three queries have completed, so the snapshot is
/// never a partial record set. The first failure wins.
pub async fn fetch_dashboard<S: RecordStore + Sync>(store: &S) -> Result<DashboardSnapshot> {
    let (loans, applications, trend) = tokio::join!(
        store.get_active_loans(),
        store.get_applications(),
        store.get_balance_trend()
    );

    let snapshot = DashboardSnapshot {
        loans: loans?.active_loans,
        applications: applications?.loans,
        trend: trend?,
    };
    debug!(
        loans = snapshot.loans.len(),
        applications = snapshot.applications.len(),
        "dashboard snapshot loaded"
    );
    Ok(snapshot)
}
