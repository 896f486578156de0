//! Goal extraction: which target percentage applies to each tracked metric

use crate::input::BusinessGoal;
use serde::{Deserialize, Serialize};

/// A metric the pro-forma tracks a goal for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GoalMetric {
    Revenue,
    Expense,
    Utilization,
}

impl GoalMetric {
    pub const ALL: [GoalMetric; 3] = [GoalMetric::Revenue, GoalMetric::Expense, GoalMetric::Utilization];

    /// Substring a goal's text must contain to target this metric (case-sensitive)
    pub fn keyword(&self) -> &'static str {
        match self {
            GoalMetric::Revenue => "Revenue",
            GoalMetric::Expense => "Expense",
            GoalMetric::Utilization => "Utilization",
        }
    }

    /// Label used in the goal chart
    pub fn goal_type(&self) -> &'static str {
        match self {
            GoalMetric::Revenue => "Increase Revenue",
            GoalMetric::Expense => "Reduce Expense",
            GoalMetric::Utilization => "Improve Utilization",
        }
    }

    pub fn matches(&self, goal: &BusinessGoal) -> bool {
        goal.goal.contains(self.keyword())
    }
}

/// Target percentage per metric
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalTargets {
    /// Revenue increase, %
    pub revenue_pct: f64,
    /// Expense reduction, %
    pub expense_pct: f64,
    /// Utilization increase, %
    pub utilization_pct: f64,
}

impl Default for GoalTargets {
    fn default() -> Self {
        Self {
            revenue_pct: 10.0,
            expense_pct: 5.0,
            utilization_pct: 15.0,
        }
    }
}

impl GoalTargets {
    pub fn new(revenue_pct: f64, expense_pct: f64, utilization_pct: f64) -> Self {
        Self { revenue_pct, expense_pct, utilization_pct }
    }

    /// Resolve targets from the user's goals.
    ///
    /// For each metric the first goal whose text contains the metric keyword wins.
    /// A matched goal with no percentage counts as 0; metrics with no matching goal
    /// keep the value from `defaults`.
    pub fn from_goals(goals: &[BusinessGoal], defaults: GoalTargets) -> Self {
        let mut targets = defaults;
        let mut found = [false; 3];

        for goal in goals {
            for (i, metric) in GoalMetric::ALL.iter().enumerate() {
                if !found[i] && metric.matches(goal) {
                    found[i] = true;
                    // A matched goal keeps its own value: blank or 0% means no change,
                    // not the metric default.
                    targets.set(*metric, goal.target_percentage.unwrap_or(0.0));
                }
            }
            if found.iter().all(|&f| f) {
                break;
            }
        }

        targets
    }

    pub fn get(&self, metric: GoalMetric) -> f64 {
        match metric {
            GoalMetric::Revenue => self.revenue_pct,
            GoalMetric::Expense => self.expense_pct,
            GoalMetric::Utilization => self.utilization_pct,
        }
    }

    fn set(&mut self, metric: GoalMetric, pct: f64) {
        match metric {
            GoalMetric::Revenue => self.revenue_pct = pct,
            GoalMetric::Expense => self.expense_pct = pct,
            GoalMetric::Utilization => self.utilization_pct = pct,
        }
    }
}
