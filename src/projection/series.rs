//! Pro-forma output structures
//!
//! Field names follow the dashboard endpoint's JSON so a result produced
//! locally is indistinguishable in shape from one returned by the backend.

use super::baseline::YearTotals;
use serde::{Deserialize, Serialize};

/// Number of points in the monthly series (current year + next year)
pub const SERIES_MONTHS: usize = 24;

/// One point of the 24-month line chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyPoint {
    /// "{month}/{year}", e.g. "3/2026"
    #[serde(rename = "month")]
    pub month_label: String,
    pub revenue: f64,
    pub expenses: f64,
    pub utilization: f64,
}

/// One bar of the yearly comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlyRow {
    #[serde(rename = "year")]
    pub period_label: String,
    pub revenue: f64,
    pub expenses: f64,
    pub profit: f64,
    pub utilization: f64,
}

impl YearlyRow {
    pub fn from_totals(period_label: &str, totals: &YearTotals) -> Self {
        Self {
            period_label: period_label.to_string(),
            revenue: totals.revenue,
            expenses: totals.expenses,
            profit: totals.profit,
            utilization: totals.utilization,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalProgress {
    pub goal_type: String,
    pub target_percentage: f64,
    /// Stand-in value: the target capped at 100, not a measured attainment
    pub achieved_percentage: f64,
}

/// Percentage change from current year to next year per metric
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GrowthRates {
    pub revenue: f64,
    pub expenses: f64,
    pub profit: f64,
    pub utilization: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub current_year: YearTotals,
    pub next_year: YearTotals,
    pub growth_rates: GrowthRates,
}

/// Complete pro-forma dashboard data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    #[serde(rename = "line_chart")]
    pub monthly_series: Vec<MonthlyPoint>,

    #[serde(rename = "bar_chart")]
    pub yearly_comparison: Vec<YearlyRow>,

    #[serde(rename = "goal_chart")]
    pub goal_progress: Vec<GoalProgress>,

    pub summary: ProjectionSummary,
}

impl ProjectionResult {
    /// Monthly profit for each point of the series
    pub fn monthly_profit(&self) -> Vec<f64> {
        self.monthly_series.iter().map(|p| p.revenue - p.expenses).collect()
    }
}
