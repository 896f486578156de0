//! Scenario runner for batch pro-forma projections
//!
//! Holds one configuration and projects many inputs, or one input under
//! several goal scenarios, in parallel.

use crate::input::FinancialInput;
use crate::projection::{GoalTargets, ProFormaEngine, ProjectionConfig, ProjectionResult};
use rayon::prelude::*;

/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new(ProjectionConfig::for_year(2026));
///
/// let scenarios = [GoalTargets::new(5.0, 0.0, 5.0), GoalTargets::new(20.0, 10.0, 25.0)];
/// let results = runner.run_scenarios(&input, &scenarios);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    engine: ProFormaEngine,
}

impl ScenarioRunner {
    pub fn new(config: ProjectionConfig) -> Self {
        Self {
            engine: ProFormaEngine::new(config),
        }
    }

    pub fn run(&self, input: &FinancialInput) -> ProjectionResult {
        self.engine.project(input)
    }

    /// Project several businesses, results in input order
    pub fn run_batch(&self, inputs: &[FinancialInput]) -> Vec<ProjectionResult> {
        log::info!("projecting {} inputs", inputs.len());
        inputs.par_iter().map(|input| self.engine.project(input)).collect()
    }

    /// Project one business under each set of targets, ignoring its own goals
    pub fn run_scenarios(&self, input: &FinancialInput, scenarios: &[GoalTargets]) -> Vec<ProjectionResult> {
        scenarios
            .par_iter()
            .map(|targets| self.engine.project_with_targets(input, *targets))
            .collect()
    }

    pub fn config(&self) -> &ProjectionConfig {
        self.engine.config()
    }
}
