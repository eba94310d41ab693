//! Fixture-backed record store
//!
//! Serves literal records, either the built-in set or one read from a JSON
//! file with the same shape:
//!
//! ```json
//! {
//!   "activeLoans": [ ... ],
//!   "applications": [ ... ],
//!   "portfolio": [ ... ],
//!   "balanceTrend": { "labels": [...], "savings": [...], "loans": [...] }
//! }
//! ```
//!
//! Missing sections fall back to the built-in data.

use std::path::Path;
use std::time::Duration;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use sacco_core::prelude::*;
use sacco_core::{
    ApplicationRecord, ApplicationStatus, BalanceTrend, LoanRecord, LoanStatus, Payment,
    RepaymentSchedule,
};

use crate::store::{ActiveLoansResponse, ApplicationsResponse, RecordStore};

/// The literal collections served by [`FixtureStore`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixtureSet {
    #[serde(default = "builtin_active_loans")]
    pub active_loans: Vec<LoanRecord>,
    #[serde(default = "builtin_applications")]
    pub applications: Vec<ApplicationRecord>,
    #[serde(default = "builtin_portfolio")]
    pub portfolio: Vec<LoanRecord>,
    #[serde(default)]
    pub balance_trend: BalanceTrend,
}

impl Default for FixtureSet {
    fn default() -> Self {
        Self {
            active_loans: builtin_active_loans(),
            applications: builtin_applications(),
            portfolio: builtin_portfolio(),
            balance_trend: BalanceTrend::default(),
        }
    }
}

/// In-memory [`RecordStore`] with optional simulated latency.
#[derive(Debug, Clone, Default)]
pub struct FixtureStore {
    fixtures: FixtureSet,
    latency: Duration,
}

impl FixtureStore {
    pub fn new(fixtures: FixtureSet) -> Self {
        Self {
            fixtures,
            latency: Duration::ZERO,
        }
    }

    /// Store serving the built-in fixture data.
    pub fn builtin() -> Self {
        Self::new(FixtureSet::default())
    }

    /// Load fixtures from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::fixture_load(path, e.to_string()))?;
        let fixtures: FixtureSet = serde_json::from_str(&content)
            .map_err(|e| Error::fixture_load(path, e.to_string()))?;

        info!(
            "Loaded fixtures from {} ({} active loans, {} applications, {} portfolio loans)",
            path.display(),
            fixtures.active_loans.len(),
            fixtures.applications.len(),
            fixtures.portfolio.len()
        );
        Ok(Self::new(fixtures))
    }

    /// Delay every query by `latency` to exercise the loading state.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn fixtures(&self) -> &FixtureSet {
        &self.fixtures
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

impl RecordStore for FixtureStore {
    async fn get_active_loans(&self) -> Result<ActiveLoansResponse> {
        self.simulate_latency().await;
        Ok(ActiveLoansResponse {
            active_loans: self.fixtures.active_loans.clone(),
        })
    }

    async fn get_applications(&self) -> Result<ApplicationsResponse> {
        self.simulate_latency().await;
        Ok(ApplicationsResponse {
            loans: self.fixtures.applications.clone(),
        })
    }

    async fn get_loan_portfolio(&self) -> Result<Vec<LoanRecord>> {
        self.simulate_latency().await;
        Ok(self.fixtures.portfolio.clone())
    }

    async fn get_balance_trend(&self) -> Result<BalanceTrend> {
        self.simulate_latency().await;
        Ok(self.fixtures.balance_trend.clone())
    }
}

// ─────────────────────────────────────────────────────────────────
// Built-in data
// ─────────────────────────────────────────────────────────────────

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

struct LoanSeed {
    id: &'static str,
    loan_number: &'static str,
    purpose: &'static str,
    amount: u64,
    interest_rate: f64,
    term_months: u32,
    due_date: NaiveDate,
    borrower_name: &'static str,
    borrower_contact: &'static str,
    outstanding_balance: u64,
    payments: Vec<Payment>,
}

impl LoanSeed {
    fn build(self) -> LoanRecord {
        LoanRecord {
            id: self.id.to_string(),
            loan_number: self.loan_number.to_string(),
            purpose: self.purpose.to_string(),
            amount: self.amount,
            interest_rate: self.interest_rate,
            term_months: self.term_months,
            repayment_schedule: RepaymentSchedule::Monthly,
            status: LoanStatus::Active,
            due_date: self.due_date,
            borrower_name: self.borrower_name.to_string(),
            borrower_contact: self.borrower_contact.to_string(),
            outstanding_balance: self.outstanding_balance,
            payment_history: self.payments,
        }
    }
}

fn two_payments(amount: u64) -> Vec<Payment> {
    vec![
        Payment {
            date: date(2025, 1, 1),
            amount,
        },
        Payment {
            date: date(2025, 2, 1),
            amount,
        },
    ]
}

/// Loans of the signed-in member, shown on the dashboard.
pub fn builtin_active_loans() -> Vec<LoanRecord> {
    [
        LoanSeed {
            id: "1",
            loan_number: "ML001",
            purpose: "Education",
            amount: 5_000,
            interest_rate: 5.0,
            term_months: 12,
            due_date: date(2026, 1, 31),
            borrower_name: "John Doe",
            borrower_contact: "john.doe@example.com",
            outstanding_balance: 5_000,
            payments: Vec::new(),
        },
        LoanSeed {
            id: "2",
            loan_number: "ML002",
            purpose: "Car Purchase",
            amount: 12_000,
            interest_rate: 6.0,
            term_months: 24,
            due_date: date(2027, 1, 31),
            borrower_name: "John Doe",
            borrower_contact: "john.doe@example.com",
            outstanding_balance: 12_000,
            payments: Vec::new(),
        },
        LoanSeed {
            id: "3",
            loan_number: "ML003",
            purpose: "Home Renovation",
            amount: 8_000,
            interest_rate: 5.5,
            term_months: 18,
            due_date: date(2026, 7, 31),
            borrower_name: "John Doe",
            borrower_contact: "john.doe@example.com",
            outstanding_balance: 8_000,
            payments: Vec::new(),
        },
    ]
    .into_iter()
    .map(LoanSeed::build)
    .collect()
}

pub fn builtin_applications() -> Vec<ApplicationRecord> {
    vec![
        ApplicationRecord {
            id: "4".to_string(),
            purpose: "Medical Bills".to_string(),
            amount: 3_000,
            status: ApplicationStatus::Pending,
        },
        ApplicationRecord {
            id: "5".to_string(),
            purpose: "Business Expansion".to_string(),
            amount: 15_000,
            status: ApplicationStatus::Pending,
        },
    ]
}

/// Loans listed on the Loan Management screen.
pub fn builtin_portfolio() -> Vec<LoanRecord> {
    [
        LoanSeed {
            id: "1",
            loan_number: "LN001",
            purpose: "Education",
            amount: 50_000,
            interest_rate: 5.0,
            term_months: 12,
            due_date: date(2025, 12, 31),
            borrower_name: "John Doe",
            borrower_contact: "john.doe@example.com",
            outstanding_balance: 40_000,
            payments: two_payments(5_000),
        },
        LoanSeed {
            id: "2",
            loan_number: "LN002",
            purpose: "Car Purchase",
            amount: 120_000,
            interest_rate: 6.0,
            term_months: 24,
            due_date: date(2026, 5, 15),
            borrower_name: "Jane Smith",
            borrower_contact: "jane.smith@example.com",
            outstanding_balance: 100_000,
            payments: two_payments(10_000),
        },
        LoanSeed {
            id: "3",
            loan_number: "LN003",
            purpose: "Home Renovation",
            amount: 75_000,
            interest_rate: 5.0,
            term_months: 18,
            due_date: date(2025, 8, 20),
            borrower_name: "Alice Johnson",
            borrower_contact: "alice.johnson@example.com",
            outstanding_balance: 60_000,
            payments: two_payments(7_500),
        },
    ]
    .into_iter()
    .map(LoanSeed::build)
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fetch_dashboard;
    use sacco_core::DashboardStats;
    use std::io::Write;

    #[tokio::test]
    async fn test_builtin_dashboard_stats() {
        let store = FixtureStore::builtin();
        let snapshot = fetch_dashboard(&store).await.unwrap();
        assert_eq!(
            snapshot.stats(),
            DashboardStats {
                total_loan_amount: 25_000,
                total_pending_amount: 18_000,
                active_loan_count: 3,
                pending_application_count: 2,
            }
        );
        assert_eq!(snapshot.trend.latest_savings(), 6_500);
    }

    #[tokio::test]
    async fn test_builtin_portfolio() {
        let portfolio = FixtureStore::builtin().get_loan_portfolio().await.unwrap();
        let numbers: Vec<_> = portfolio.iter().map(|l| l.loan_number.as_str()).collect();
        assert_eq!(numbers, ["LN001", "LN002", "LN003"]);
        assert_eq!(portfolio[1].borrower_name, "Jane Smith");
        assert_eq!(portfolio[1].outstanding_balance, 100_000);
        assert_eq!(portfolio[2].total_repaid(), 15_000);
    }

    #[tokio::test]
    async fn test_latency_delays_queries() {
        let store = FixtureStore::builtin().with_latency(Duration::from_millis(30));
        let start = std::time::Instant::now();
        let loans = store.get_active_loans().await.unwrap();
        assert_eq!(loans.active_loans.len(), 3);
        assert!(start.elapsed() >= Duration::from_millis(30));
    }

    #[test]
    fn test_from_path_partial_file_uses_builtin_sections() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"applications": [{{"id": "9", "purpose": "Roof", "amount": 700, "status": "approved"}}]}}"#
        )
        .unwrap();

        let store = FixtureStore::from_path(file.path()).unwrap();
        assert_eq!(store.fixtures().applications.len(), 1);
        assert_eq!(store.fixtures().active_loans, builtin_active_loans());
        assert_eq!(store.fixtures().portfolio.len(), 3);
    }

    #[test]
    fn test_from_path_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        assert!(matches!(
            FixtureStore::from_path(&missing),
            Err(Error::FixtureLoad { .. })
        ));

        let bad = dir.path().join("bad.json");
        std::fs::write(&bad, "{ not json").unwrap();
        let err = FixtureStore::from_path(&bad).unwrap_err();
        assert!(err.to_string().contains("bad.json"));
    }

    #[test]
    fn test_fixture_set_serializes_camel_case() {
        let json = serde_json::to_value(FixtureSet::default()).unwrap();
        assert!(json.get("activeLoans").is_some());
        assert!(json.get("balanceTrend").is_some());
        assert_eq!(json["portfolio"][0]["loanNumber"], "LN001");
    }
}
