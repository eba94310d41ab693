//! Loan and application records served by the record store
//!
//! Field names serialize in camelCase so fixture files keep the shape of the
//! portal's JSON API (`loanNumber`, `interestRate`, `paymentHistory`, ...).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// How often a borrower repays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RepaymentSchedule {
    Weekly,
    #[default]
    Monthly,
    Quarterly,
}

impl std::fmt::Display for RepaymentSchedule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RepaymentSchedule::Weekly => write!(f, "Weekly"),
            RepaymentSchedule::Monthly => write!(f, "Monthly"),
            RepaymentSchedule::Quarterly => write!(f, "Quarterly"),
        }
    }
}

/// Lifecycle status of a disbursed loan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LoanStatus {
    #[default]
    Active,
    Overdue,
    Closed,
}

impl std::fmt::Display for LoanStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoanStatus::Active => write!(f, "Active"),
            LoanStatus::Overdue => write!(f, "Overdue"),
            LoanStatus::Closed => write!(f, "Closed"),
        }
    }
}

/// Review status of a loan application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl std::fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApplicationStatus::Pending => write!(f, "pending"),
            ApplicationStatus::Approved => write!(f, "approved"),
            ApplicationStatus::Rejected => write!(f, "rejected"),
        }
    }
}

/// A single repayment against a loan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    pub date: NaiveDate,
    pub amount: u64,
}

/// A disbursed loan. Amounts are whole currency units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanRecord {
    pub id: String,
    pub loan_number: String,
    pub purpose: String,
    pub amount: u64,
    /// Annual rate in percent (5.0 = 5%)
    pub interest_rate: f64,
    /// Repayment term in months
    pub term_months: u32,
    pub repayment_schedule: RepaymentSchedule,
    pub status: LoanStatus,
    pub due_date: NaiveDate,
    pub borrower_name: String,
    pub borrower_contact: String,
    pub outstanding_balance: u64,
    /// Oldest payment first
    #[serde(default)]
    pub payment_history: Vec<Payment>,
}

impl LoanRecord {
    /// Sum of every recorded payment.
    pub fn total_repaid(&self) -> u64 {
        self.payment_history
            .iter()
            .fold(0u64, |acc, p| acc.saturating_add(p.amount))
    }
}

/// A loan application awaiting (or past) review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationRecord {
    pub id: String,
    pub purpose: String,
    pub amount: u64,
    pub status: ApplicationStatus,
}

impl ApplicationRecord {
    pub fn is_pending(&self) -> bool {
        self.status == ApplicationStatus::Pending
    }
}
