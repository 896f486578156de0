//! Wizard state owned by the caller and threaded through the steps by value

use crate::dashboard::DashboardData;
use crate::input::{BusinessGoal, Classroom, ExpenseItem, FinancialInput, RevenueSource};
use crate::insights::KeyMetrics;
use serde::{Deserialize, Serialize};

/// Stages of the simulator, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WizardStep {
    Welcome,
    Input,
    Insights,
    NextSteps,
    Dashboard,
}

impl WizardStep {
    pub const ALL: [WizardStep; 5] = [
        WizardStep::Welcome,
        WizardStep::Input,
        WizardStep::Insights,
        WizardStep::NextSteps,
        WizardStep::Dashboard,
    ];

    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Following step; the last step stays put
    pub fn next(&self) -> Self {
        Self::ALL.get(self.index() + 1).copied().unwrap_or(*self)
    }

    /// Preceding step; the first step stays put
    pub fn previous(&self) -> Self {
        match self.index() {
            0 => *self,
            i => Self::ALL[i - 1],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WizardState {
    pub step: WizardStep,
    pub form: FinancialInput,
    pub insights: Option<KeyMetrics>,
    pub recommendations: Option<Vec<String>>,
    /// Action-plan checklist, one flag per recommendation
    #[serde(default)]
    pub completed_steps: Vec<bool>,
    pub dashboard: Option<DashboardData>,
}

impl Default for WizardState {
    fn default() -> Self {
        Self {
            step: WizardStep::Welcome,
            form: default_form(),
            insights: None,
            recommendations: None,
            completed_steps: Vec::new(),
            dashboard: None,
        }
    }
}

impl WizardState {
    pub fn advance(self) -> Self {
        let step = self.step.next();
        Self { step, ..self }
    }

    pub fn back(self) -> Self {
        let step = self.step.previous();
        Self { step, ..self }
    }

    pub fn go_to(self, step: WizardStep) -> Self {
        Self { step, ..self }
    }

    /// Replace the form. Anything derived from the old form is cleared.
    pub fn with_form(self, form: FinancialInput) -> Self {
        Self {
            form,
            insights: None,
            recommendations: None,
            completed_steps: Vec::new(),
            dashboard: None,
            ..self
        }
    }

    pub fn with_insights(self, insights: KeyMetrics) -> Self {
        Self {
            insights: Some(insights),
            ..self
        }
    }

    /// Set the action plan; every step starts unchecked
    pub fn with_recommendations(self, recommendations: Vec<String>) -> Self {
        Self {
            completed_steps: vec![false; recommendations.len()],
            recommendations: Some(recommendations),
            ..self
        }
    }

    /// Flip one action-plan checkbox. Out-of-range indices are ignored.
    pub fn toggle_step(mut self, index: usize) -> Self {
        if let Some(done) = self.completed_steps.get_mut(index) {
            *done = !*done;
        }
        self
    }

    /// Checked steps as a rounded percentage of the plan, 0 for an empty plan
    pub fn action_plan_progress(&self) -> u32 {
        let total = self.completed_steps.len();
        if total == 0 {
            return 0;
        }
        let done = self.completed_steps.iter().filter(|&&d| d).count();
        (done as f64 / total as f64 * 100.0).round() as u32
    }

    pub fn with_dashboard(self, dashboard: DashboardData) -> Self {
        Self {
            dashboard: Some(dashboard),
            ..self
        }
    }
}

/// Blank form the wizard opens with
pub fn default_form() -> FinancialInput {
    let blank_expense = |id: &str| ExpenseItem::new(id, "", 0.0);

    FinancialInput {
        business_name: "Demo Daycare Center".to_string(),
        revenue_sources: vec![RevenueSource::new("1", "", 0.0), RevenueSource::new("2", "", 0.0)],
        employees: vec![blank_expense("1"), blank_expense("2")],
        facilities: vec![blank_expense("1")],
        administrative: vec![blank_expense("1")],
        supplies: vec![blank_expense("1")],
        classrooms: vec![Classroom {
            ratio: Some(0.0),
            ..Classroom::new("1", "", 0.0, 0.0)
        }],
        operating_hours: Some(0.0),
        operating_days: Some(0.0),
        goals: vec![BusinessGoal::new("1", "Increase Enrollment", 0.0)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insights::default_recommendations;
    use crate::projection::{ProFormaEngine, ProjectionConfig};

    #[test]
    fn test_step_navigation_saturates() {
        assert_eq!(WizardStep::Welcome.previous(), WizardStep::Welcome);
        assert_eq!(WizardStep::Welcome.next(), WizardStep::Input);
        assert_eq!(WizardStep::NextSteps.next(), WizardStep::Dashboard);
        assert_eq!(WizardStep::Dashboard.next(), WizardStep::Dashboard);
        assert_eq!(WizardStep::Dashboard.previous(), WizardStep::NextSteps);
    }

    #[test]
    fn test_default_state() {
        let state = WizardState::default();

        assert_eq!(state.step, WizardStep::Welcome);
        assert_eq!(state.form.business_name, "Demo Daycare Center");
        assert_eq!(state.form.revenue_sources.len(), 2);
        assert_eq!(state.form.goals[0].goal, "Increase Enrollment");
        assert!(state.insights.is_none());
    }

    #[test]
    fn test_full_walkthrough() {
        let engine = ProFormaEngine::new(ProjectionConfig::for_year(2025));

        let mut form = default_form();
        form.revenue_sources[0] = RevenueSource::new("1", "Tuition", 30000.0);

        let state = WizardState::default().advance().with_form(form);
        assert_eq!(state.step, WizardStep::Input);

        let insights = KeyMetrics::from_input(&state.form);
        let state = state.with_insights(insights).advance();
        assert_eq!(state.step, WizardStep::Insights);

        let state = state.with_recommendations(default_recommendations()).advance();
        let dashboard = DashboardData::Fallback(engine.project(&state.form));
        let state = state.with_dashboard(dashboard).advance();

        assert_eq!(state.step, WizardStep::Dashboard);
        assert_eq!(state.insights.as_ref().map(|m| m.net_monthly_income), Some(30000.0));
        assert!(state.dashboard.as_ref().is_some_and(DashboardData::is_fallback));
    }

    #[test]
    fn test_editing_form_clears_derived_results() {
        let state = WizardState::default()
            .go_to(WizardStep::Dashboard)
            .with_insights(KeyMetrics::from_input(&default_form()))
            .with_recommendations(default_recommendations())
            .toggle_step(0);

        let state = state.with_form(FinancialInput::default()).back();

        assert!(state.insights.is_none());
        assert!(state.recommendations.is_none());
        assert!(state.completed_steps.is_empty());
        assert_eq!(state.action_plan_progress(), 0);
        assert_eq!(state.step, WizardStep::NextSteps);
    }

    fn plan(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("Step {}", i)).collect()
    }

    #[test]
    fn test_empty_action_plan_progress() {
        assert_eq!(WizardState::default().action_plan_progress(), 0);
        assert_eq!(WizardState::default().with_recommendations(Vec::new()).action_plan_progress(), 0);
    }

    #[test]
    fn test_action_plan_progress_rounds() {
        let state = WizardState::default().with_recommendations(plan(3)).toggle_step(1);
        assert_eq!(state.completed_steps, vec![false, true, false]);
        assert_eq!(state.action_plan_progress(), 33);

        let state = state.toggle_step(2);
        assert_eq!(state.action_plan_progress(), 67);

        let state = state.toggle_step(1).toggle_step(2);
        assert_eq!(state.action_plan_progress(), 0);
    }

    #[test]
    fn test_toggle_out_of_range_is_ignored() {
        let state = WizardState::default().with_recommendations(plan(2)).toggle_step(0);
        let toggled = state.clone().toggle_step(2);
        assert_eq!(toggled, state);
        assert_eq!(toggled.action_plan_progress(), 50);
    }

    #[test]
    fn test_new_recommendations_reset_checklist() {
        let state = WizardState::default()
            .with_recommendations(plan(3))
            .toggle_step(0)
            .toggle_step(2)
            .with_recommendations(plan(4));

        assert_eq!(state.completed_steps, vec![false; 4]);
        assert_eq!(state.action_plan_progress(), 0);
    }
}
