//! Plain chart inputs handed to the presentation layer
//!
//! The renderer receives `{labels, datasets}` and never inspects where the
//! numbers came from. Everything here is a pure transformation.

use serde::{Deserialize, Serialize};

use crate::stats::DashboardStats;

/// One named series of values, aligned with [`ChartData::labels`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    pub label: String,
    pub data: Vec<u64>,
}

impl Dataset {
    pub fn new(label: impl Into<String>, data: Vec<u64>) -> Self {
        Self {
            label: label.into(),
            data,
        }
    }

    pub fn max(&self) -> u64 {
        self.data.iter().copied().max().unwrap_or(0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

impl ChartData {
    /// Largest value across every dataset (0 when empty).
    pub fn max_value(&self) -> u64 {
        self.datasets.iter().map(Dataset::max).max().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty() || self.datasets.iter().all(|d| d.data.is_empty())
    }
}

/// Monthly savings and loan balances.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceTrend {
    pub labels: Vec<String>,
    pub savings: Vec<u64>,
    pub loans: Vec<u64>,
}

impl Default for BalanceTrend {
    fn default() -> Self {
        Self {
            labels: ["Jan", "Feb", "Mar", "Apr", "May", "Jun"]
                .into_iter()
                .map(String::from)
                .collect(),
            savings: vec![3000, 3800, 4200, 5100, 5800, 6500],
            loans: vec![0, 0, 2000, 1800, 1600, 1400],
        }
    }
}

impl BalanceTrend {
    pub fn into_chart(self) -> ChartData {
        ChartData {
            labels: self.labels,
            datasets: vec![
                Dataset::new("Savings", self.savings),
                Dataset::new("Loan Balance", self.loans),
            ],
        }
    }

    pub fn to_chart(&self) -> ChartData {
        self.clone().into_chart()
    }

    /// Most recent savings balance, 0 if the series is empty.
    pub fn latest_savings(&self) -> u64 {
        self.savings.last().copied().unwrap_or(0)
    }

    /// Month-over-month savings growth in percent.
    ///
    /// `None` with fewer than two points or a zero previous balance.
    pub fn growth_percent(&self) -> Option<f64> {
        let [.., previous, latest] = self.savings.as_slice() else {
            return None;
        };
        if *previous == 0 {
            return None;
        }
        Some((*latest as f64 - *previous as f64) / *previous as f64 * 100.0)
    }
}

/// Split of the member's credit limit into loans, pending applications and
/// what remains available.
///
/// Available credit saturates at zero when commitments exceed the limit.
pub fn financial_distribution(stats: &DashboardStats, credit_limit: u64) -> ChartData {
    let available = credit_limit
        .saturating_sub(stats.total_loan_amount)
        .saturating_sub(stats.total_pending_amount);

    ChartData {
        labels: vec![
            "Active Loans".to_string(),
            "Pending Applications".to_string(),
            "Available Credit".to_string(),
        ],
        datasets: vec![Dataset::new(
            "Distribution",
            vec![
                stats.total_loan_amount,
                stats.total_pending_amount,
                available,
            ],
        )],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_trend_chart() {
        let chart = BalanceTrend::default().into_chart();
        assert_eq!(chart.labels.len(), 6);
        assert_eq!(chart.datasets.len(), 2);
        assert_eq!(chart.datasets[0].label, "Savings");
        assert_eq!(chart.max_value(), 6500);
    }

    #[test]
    fn test_growth_percent() {
        let trend = BalanceTrend::default();
        assert_eq!(trend.latest_savings(), 6500);
        let growth = trend.growth_percent().unwrap();
        assert!((growth - 12.068).abs() < 0.01, "got {growth}");
    }

    #[test]
    fn test_growth_percent_undefined() {
        let mut trend = BalanceTrend::default();
        trend.savings = vec![100];
        assert_eq!(trend.growth_percent(), None);

        trend.savings = vec![0, 100];
        assert_eq!(trend.growth_percent(), None);

        trend.savings.clear();
        assert_eq!(trend.latest_savings(), 0);
    }

    #[test]
    fn test_financial_distribution() {
        let stats = DashboardStats {
            total_loan_amount: 25_000,
            total_pending_amount: 18_000,
            active_loan_count: 3,
            pending_application_count: 2,
        };
        let chart = financial_distribution(&stats, 50_000);
        assert_eq!(chart.datasets[0].data, vec![25_000, 18_000, 7_000]);
        assert_eq!(chart.labels[2], "Available Credit");
    }

    #[test]
    fn test_available_credit_saturates() {
        let stats = DashboardStats {
            total_loan_amount: 40_000,
            total_pending_amount: 30_000,
            ..Default::default()
        };
        let chart = financial_distribution(&stats, 50_000);
        assert_eq!(chart.datasets[0].data[2], 0);
    }

    #[test]
    fn test_empty_chart() {
        assert!(ChartData::default().is_empty());
        assert_eq!(ChartData::default().max_value(), 0);
    }
}
