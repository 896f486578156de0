//! Annual baseline and next-year target derived from one input snapshot

use super::goals::GoalTargets;
use crate::input::FinancialInput;
use serde::{Deserialize, Serialize};

/// Annual totals for one period of the pro-forma
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct YearTotals {
    pub revenue: f64,
    pub expenses: f64,
    pub profit: f64,
    /// Classroom utilization, % of capacity
    pub utilization: f64,
}

impl YearTotals {
    /// Build totals, deriving profit so that `profit == revenue - expenses` always holds
    pub fn new(revenue: f64, expenses: f64, utilization: f64) -> Self {
        Self {
            revenue,
            expenses,
            profit: revenue - expenses,
            utilization,
        }
    }

    /// Current year: twelve months of the entered monthly figures
    pub fn current(input: &FinancialInput) -> Self {
        Self::new(
            input.monthly_revenue() * 12.0,
            input.monthly_expenses() * 12.0,
            input.utilization_pct(),
        )
    }

    /// Next year: current totals moved by the goal percentages.
    /// Utilization stays within 0..=100%.
    pub fn target(current: &YearTotals, targets: &GoalTargets) -> Self {
        let revenue = current.revenue * (1.0 + targets.revenue_pct / 100.0);
        let expenses = current.expenses * (1.0 - targets.expense_pct / 100.0);
        let utilization = (current.utilization * (1.0 + targets.utilization_pct / 100.0)).clamp(0.0, 100.0);

        Self::new(revenue, expenses, utilization)
    }
}

/// Baseline plus target, the two anchors every other output is built from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Baseline {
    pub current: YearTotals,
    pub next: YearTotals,
    pub targets: GoalTargets,
}

impl Baseline {
    pub fn new(input: &FinancialInput, targets: GoalTargets) -> Self {
        let current = YearTotals::current(input);
        let next = YearTotals::target(&current, &targets);
        Self { current, next, targets }
    }

    /// Monthly revenue step toward the next-year total
    pub fn monthly_revenue_growth(&self) -> f64 {
        (self.next.revenue - self.current.revenue) / 12.0
    }

    /// Monthly expense reduction toward the next-year total
    pub fn monthly_expense_reduction(&self) -> f64 {
        (self.current.expenses - self.next.expenses) / 12.0
    }

    pub fn monthly_utilization_growth(&self) -> f64 {
        (self.next.utilization - self.current.utilization) / 12.0
    }

    /// Profit growth in percent, 0 when there is no baseline profit or loss
    pub fn profit_growth_pct(&self) -> f64 {
        if self.current.profit != 0.0 {
            (self.next.profit - self.current.profit) / self.current.profit * 100.0
        } else {
            0.0
        }
    }
}
