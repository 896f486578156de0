//! Key operating metrics computed directly from the wizard input
//!
//! All figures are monthly:
//! - Net monthly income = total revenue - total expenses
//! - Break-even enrollment = total expenses / average revenue per enrolled student
//! - Largest expense = category with the highest share of total expenses
//! - Capacity utilization = enrolled students / capacity * 100

use crate::input::{ExpenseCategory, FinancialInput};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LargestExpense {
    pub category: ExpenseCategory,
    pub monthly_amount: f64,
    pub percentage_of_total_expenses: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyMetrics {
    pub net_monthly_income: f64,

    /// Students needed to cover expenses at the current revenue per student
    pub break_even_enrollment: Option<f64>,

    pub largest_expense: Option<LargestExpense>,

    /// Percent of total classroom capacity
    pub capacity_utilization: f64,
}

impl KeyMetrics {
    pub fn from_input(input: &FinancialInput) -> Self {
        let revenue = input.monthly_revenue();
        let expenses = input.monthly_expenses();
        let students = input.total_students();

        let break_even_enrollment = if students > 0.0 && revenue > 0.0 {
            let revenue_per_student = revenue / students;
            Some((expenses / revenue_per_student).ceil())
        } else {
            None
        };

        Self {
            net_monthly_income: revenue - expenses,
            break_even_enrollment,
            largest_expense: largest_expense(input, expenses),
            capacity_utilization: input.utilization_pct(),
        }
    }

    pub fn is_profitable(&self) -> bool {
        self.net_monthly_income > 0.0
    }
}

/// Highest-spend category; earlier categories win ties
fn largest_expense(input: &FinancialInput, total: f64) -> Option<LargestExpense> {
    if total <= 0.0 {
        return None;
    }

    let mut best: Option<(ExpenseCategory, f64)> = None;
    for category in ExpenseCategory::ALL {
        let amount = input.category_monthly_expenses(category);
        if best.map_or(true, |(_, b)| amount > b) {
            best = Some((category, amount));
        }
    }

    best.map(|(category, monthly_amount)| LargestExpense {
        category,
        monthly_amount,
        percentage_of_total_expenses: monthly_amount / total * 100.0,
    })
}

/// Recommendations shown when none could be fetched from the backend
pub fn default_recommendations() -> Vec<String> {
    [
        "Review your financial reports regularly",
        "Optimize staff scheduling based on enrollment patterns",
        "Explore new revenue streams like after-school programs",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}
