//! Pro-forma projection: baseline, goal targets, monthly series and rollups

mod goals;
mod baseline;
mod series;
mod engine;
pub mod export;

pub use goals::{GoalMetric, GoalTargets};
pub use baseline::{Baseline, YearTotals};
pub use series::{
    GoalProgress, GrowthRates, MonthlyPoint, ProjectionResult, ProjectionSummary, YearlyRow,
    SERIES_MONTHS,
};
pub use engine::{project, ProFormaEngine, ProjectionConfig};
