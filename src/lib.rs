//! Daycare Simulator - pro-forma projection engine for daycare operations
//!
//! This library provides:
//! - The wizard's financial input model (revenue, expenses, classrooms, goals)
//! - A two-year pro-forma projection driven by goal percentages
//! - Key operating metrics (net income, break-even enrollment, utilization)
//! - Dashboard loading from the backend with an explicit local fallback
//! - Batch and multi-scenario projections

pub mod error;
pub mod input;
pub mod projection;
pub mod insights;
pub mod dashboard;
pub mod wizard;
pub mod scenario;

// Re-export commonly used types
pub use error::SimulatorError;
pub use input::FinancialInput;
pub use projection::{project, ProFormaEngine, ProjectionConfig, ProjectionResult};
pub use dashboard::{DashboardData, DashboardService};
pub use scenario::ScenarioRunner;
