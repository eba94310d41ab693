//! # sacco-core - Core Domain Types
//!
//! Foundation crate for the SACCO member portal. Provides domain records,
//! the credential check, dashboard aggregation, the route table and error
//! handling.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, tracing, toml).
//!
//! ## Public API
//!
//! ### Navigation (`types`)
//! - [`Destination`] - Top-level screens reachable from the sidebar
//! - [`Route`] - Route table entry (`/`, `/dashboard`, ...)
//! - [`MemberProfile`] - Signed-in member shown on the dashboard
//!
//! ### Records (`records`)
//! - [`LoanRecord`], [`Payment`] - Disbursed loans and their repayments
//! - [`ApplicationRecord`] - Loan applications under review
//!
//! ### Aggregation (`stats`, `chart`)
//! - [`compute_stats()`] - Pure dashboard aggregation over a loaded record set
//! - [`DashboardStats`] - Totals and counts shown on the dashboard cards
//! - [`ChartData`], [`BalanceTrend`], [`financial_distribution()`] - Chart inputs
//!
//! ### Credentials (`credentials`)
//! - [`Credentials`] - The single accepted username/password pair
//! - [`CredentialCheck`] - Accepted / RejectedUsername / RejectedPassword
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use sacco_core::prelude::*;
//! ```

pub mod chart;
pub mod credentials;
pub mod currency;
pub mod error;
pub mod logging;
pub mod prelude;
pub mod records;
pub mod stats;
pub mod types;

// Re-export commonly used types at crate root for convenience
pub use chart::{financial_distribution, BalanceTrend, ChartData, Dataset};
pub use credentials::{CredentialCheck, Credentials};
pub use currency::{format_change, format_currency};
pub use error::{CredentialRejection, Error, Result, ResultExt};
pub use records::{
    ApplicationRecord, ApplicationStatus, LoanRecord, LoanStatus, Payment, RepaymentSchedule,
};
pub use stats::{compute_stats, DashboardStats};
pub use types::{Destination, MemberProfile, Route};
