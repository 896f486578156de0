//! Core pro-forma engine: two-year monthly projection from goal percentages

use super::baseline::Baseline;
use super::goals::{GoalMetric, GoalTargets};
use super::series::{
    GoalProgress, GrowthRates, MonthlyPoint, ProjectionResult, ProjectionSummary, YearlyRow,
    SERIES_MONTHS,
};
use crate::input::FinancialInput;
use chrono::Datelike;

/// Configuration for a projection run
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionConfig {
    /// Calendar year of the first month in the series
    pub base_year: i32,

    /// Targets used for metrics the user set no goal for
    pub default_targets: GoalTargets,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            base_year: chrono::Local::now().year(),
            default_targets: GoalTargets::default(),
        }
    }
}

impl ProjectionConfig {
    pub fn for_year(base_year: i32) -> Self {
        Self {
            base_year,
            ..Default::default()
        }
    }
}

/// Main projection engine
#[derive(Debug, Clone, Default)]
pub struct ProFormaEngine {
    config: ProjectionConfig,
}

impl ProFormaEngine {
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Run the projection using the goals entered in the input
    pub fn project(&self, input: &FinancialInput) -> ProjectionResult {
        let targets = GoalTargets::from_goals(&input.goals, self.config.default_targets);
        self.project_with_targets(input, targets)
    }

    /// Run the projection with explicit targets, ignoring the input's goals
    pub fn project_with_targets(&self, input: &FinancialInput, targets: GoalTargets) -> ProjectionResult {
        let baseline = Baseline::new(input, targets);

        log::debug!(
            "pro-forma for '{}': current revenue={:.2} expenses={:.2} utilization={:.2}%, targets={:?}",
            input.business_name,
            baseline.current.revenue,
            baseline.current.expenses,
            baseline.current.utilization,
            targets,
        );

        ProjectionResult {
            monthly_series: self.monthly_series(&baseline),
            yearly_comparison: vec![
                YearlyRow::from_totals("Current Year", &baseline.current),
                YearlyRow::from_totals("Next Year", &baseline.next),
            ],
            goal_progress: goal_progress(&targets),
            summary: ProjectionSummary {
                current_year: baseline.current,
                next_year: baseline.next,
                growth_rates: GrowthRates {
                    revenue: targets.revenue_pct,
                    expenses: -targets.expense_pct,
                    profit: baseline.profit_growth_pct(),
                    utilization: targets.utilization_pct,
                },
            },
        }
    }

    /// 24 monthly points: flat for the current year, then a straight-line ramp.
    ///
    /// In the second year `progress = (month - 11) / 12` scales a step of one
    /// twelfth of the annual difference. Utilization uses the same step, so by
    /// month 23 it has covered only a twelfth of its gap.
    fn monthly_series(&self, baseline: &Baseline) -> Vec<MonthlyPoint> {
        let year = self.config.base_year;
        let base_revenue = baseline.current.revenue / 12.0;
        let base_expenses = baseline.current.expenses / 12.0;
        let base_utilization = baseline.current.utilization;

        let revenue_growth = baseline.monthly_revenue_growth();
        let expense_reduction = baseline.monthly_expense_reduction();
        let utilization_growth = baseline.monthly_utilization_growth();

        (0..SERIES_MONTHS)
            .map(|month| {
                if month < 12 {
                    MonthlyPoint {
                        month_label: format!("{}/{}", month + 1, year),
                        revenue: base_revenue,
                        expenses: base_expenses,
                        utilization: base_utilization,
                    }
                } else {
                    let progress = (month as f64 - 11.0) / 12.0;
                    MonthlyPoint {
                        month_label: format!("{}/{}", month - 11, year + 1),
                        revenue: base_revenue + revenue_growth * progress,
                        expenses: base_expenses - expense_reduction * progress,
                        utilization: base_utilization + utilization_growth * progress,
                    }
                }
            })
            .collect()
    }
}

/// Goal chart rows; achievement is the target capped at 100
fn goal_progress(targets: &GoalTargets) -> Vec<GoalProgress> {
    GoalMetric::ALL
        .iter()
        .map(|metric| {
            let pct = targets.get(*metric);
            GoalProgress {
                goal_type: metric.goal_type().to_string(),
                target_percentage: pct,
                achieved_percentage: pct.min(100.0),
            }
        })
        .collect()
}

/// Project with the default configuration (current calendar year)
pub fn project(input: &FinancialInput) -> ProjectionResult {
    ProFormaEngine::default().project(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{BusinessGoal, Classroom, ExpenseItem, RevenueSource};
    use approx::assert_relative_eq;

    fn engine() -> ProFormaEngine {
        ProFormaEngine::new(ProjectionConfig::for_year(2025))
    }

    fn sample_input() -> FinancialInput {
        FinancialInput {
            business_name: "Demo Daycare Center".into(),
            revenue_sources: vec![
                RevenueSource::new("1", "Tuition", 50000.0),
                RevenueSource::new("2", "Other", 5.0),
            ],
            employees: vec![
                ExpenseItem::new("1", "Teacher", 5000.0),
                ExpenseItem::new("2", "Director", 10000.0),
            ],
            facilities: vec![ExpenseItem::new("1", "Lease", 2000.0)],
            administrative: vec![ExpenseItem::new("1", "Software", 500.0)],
            supplies: vec![ExpenseItem::new("1", "Utilities", 300.0)],
            classrooms: vec![
                Classroom::new("1", "Toddler", 23.0, 12.0),
                Classroom::new("2", "Other", 2.0, 1.0),
            ],
            goals: vec![
                BusinessGoal::new("1", "Increase Revenue", 15.0),
                BusinessGoal::new("2", "Reduce Expense", 20.0),
                BusinessGoal::new("3", "Improve Classroom Utilization", 30.0),
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_input_is_all_zero() {
        let result = engine().project(&FinancialInput::default());

        let current = result.summary.current_year;
        assert_eq!(current.revenue, 0.0);
        assert_eq!(current.expenses, 0.0);
        assert_eq!(current.utilization, 0.0);
        assert_eq!(result.summary.growth_rates.profit, 0.0);
        assert!(result.monthly_series.iter().all(|p| p.revenue == 0.0 && p.utilization == 0.0));
    }

    #[test]
    fn test_empty_input_serializes_positive_zero() {
        let result = engine().project(&FinancialInput::default());

        assert!(result.summary.current_year.revenue.is_sign_positive());
        assert!(result.summary.current_year.expenses.is_sign_positive());
        assert!(result
            .monthly_series
            .iter()
            .all(|p| p.revenue.is_sign_positive() && p.expenses.is_sign_positive()));

        let json = serde_json::to_string(&result.summary.current_year).unwrap();
        assert!(json.contains("\"revenue\":0.0"), "{}", json);
        assert!(json.contains("\"expenses\":0.0"), "{}", json);
    }

    #[test]
    fn test_series_shape_and_labels() {
        let result = engine().project(&sample_input());
        let series = &result.monthly_series;

        assert_eq!(series.len(), 24);
        assert_eq!(series[0].month_label, "1/2025");
        assert_eq!(series[11].month_label, "12/2025");
        assert_eq!(series[12].month_label, "1/2026");
        assert_eq!(series[23].month_label, "12/2026");

        for point in &series[1..12] {
            assert_eq!(point.revenue, series[0].revenue);
            assert_eq!(point.expenses, series[0].expenses);
            assert_eq!(point.utilization, series[0].utilization);
        }
    }

    #[test]
    fn test_revenue_ramp_scenario() {
        let input = FinancialInput {
            revenue_sources: vec![
                RevenueSource::new("1", "Tuition", 1000.0),
                RevenueSource::new("2", "Fees", 500.0),
            ],
            goals: vec![BusinessGoal::new("1", "Increase Revenue", 10.0)],
            ..Default::default()
        };

        let result = engine().project(&input);

        assert_relative_eq!(result.summary.current_year.revenue, 18000.0);
        assert_relative_eq!(result.summary.next_year.revenue, 19800.0, epsilon = 1e-9);
        assert_relative_eq!(result.monthly_series[11].revenue, 1500.0);
        assert_relative_eq!(result.monthly_series[12].revenue, 1512.5, epsilon = 1e-9);
        assert_relative_eq!(result.monthly_series[23].revenue, 1650.0, epsilon = 1e-9);
    }

    #[test]
    fn test_expenses_and_utilization_ramp() {
        let result = engine().project(&sample_input());
        let base = &result.monthly_series[0];
        let last = &result.monthly_series[23];

        // 17800/month with a 20% reduction lands on 14240/month by the end of the ramp
        assert_relative_eq!(base.expenses, 17800.0, epsilon = 1e-9);
        assert_relative_eq!(last.expenses, 14240.0, epsilon = 1e-6);

        // 13/25 = 52%, +30% => 67.6%, stepped in twelfths of the difference
        assert_relative_eq!(base.utilization, 52.0, epsilon = 1e-9);
        assert_relative_eq!(last.utilization, 52.0 + (67.6 - 52.0) / 12.0, epsilon = 1e-9);
    }

    #[test]
    fn test_yearly_comparison_profit_identity() {
        let result = engine().project(&sample_input());

        assert_eq!(result.yearly_comparison.len(), 2);
        assert_eq!(result.yearly_comparison[0].period_label, "Current Year");
        assert_eq!(result.yearly_comparison[1].period_label, "Next Year");
        for row in &result.yearly_comparison {
            assert_eq!(row.profit, row.revenue - row.expenses);
        }
    }

    #[test]
    fn test_goal_progress_and_growth_rates() {
        let mut input = sample_input();
        input.goals.push(BusinessGoal::new("4", "Increase Revenue", 99.0));
        input.goals[2].target_percentage = Some(250.0);

        let result = engine().project(&input);

        let types: Vec<_> = result.goal_progress.iter().map(|g| g.goal_type.as_str()).collect();
        assert_eq!(types, ["Increase Revenue", "Reduce Expense", "Improve Utilization"]);
        assert_eq!(result.goal_progress[0].target_percentage, 15.0);
        assert_eq!(result.goal_progress[2].target_percentage, 250.0);
        assert_eq!(result.goal_progress[2].achieved_percentage, 100.0);

        let growth = result.summary.growth_rates;
        assert_eq!(growth.revenue, 15.0);
        assert_eq!(growth.expenses, -20.0);
        assert_eq!(growth.utilization, 250.0);
        assert!(result.summary.next_year.utilization <= 100.0);
    }

    #[test]
    fn test_default_targets_without_goals() {
        let mut input = sample_input();
        input.goals.clear();

        let result = engine().project(&input);
        let growth = result.summary.growth_rates;

        assert_eq!(growth.revenue, 10.0);
        assert_eq!(growth.expenses, -5.0);
        assert_eq!(growth.utilization, 15.0);
    }

    #[test]
    fn test_classroom_utilization_scenarios() {
        let half_full = FinancialInput {
            classrooms: vec![
                Classroom::new("1", "A", 10.0, 5.0),
                Classroom::new("2", "B", 10.0, 5.0),
            ],
            ..Default::default()
        };
        assert_eq!(engine().project(&half_full).summary.current_year.utilization, 50.0);

        let no_capacity = FinancialInput {
            classrooms: vec![Classroom::new("1", "A", 0.0, 3.0)],
            ..Default::default()
        };
        assert_eq!(engine().project(&no_capacity).summary.current_year.utilization, 0.0);
    }

    #[test]
    fn test_serialized_shape_matches_dashboard_endpoint() {
        let result = engine().project(&sample_input());
        let value = serde_json::to_value(&result).unwrap();

        assert_eq!(value["line_chart"].as_array().map(Vec::len), Some(24));
        assert_eq!(value["line_chart"][0]["month"], "1/2025");
        assert_eq!(value["bar_chart"][1]["year"], "Next Year");
        assert_eq!(value["goal_chart"][1]["goal_type"], "Reduce Expense");
        assert!(value["summary"]["growth_rates"]["profit"].is_number());
        assert!(value["summary"]["current_year"]["utilization"].is_number());

        let back: ProjectionResult = serde_json::from_value(value).unwrap();
        assert_eq!(back.monthly_series.len(), 24);
        assert_eq!(back.yearly_comparison[0].period_label, "Current Year");
    }
}
