//! Churn Estimator - revenue impact engine for studio retention calculators
//!
//! This library provides:
//! - Churn recovery model (annual churn loss, recovery range, ROI multiple)
//! - Follow-up reach/lift retention model (incremental returns, revenue retained)
//! - Benchmark assumptions with CSV overrides and input limits
//! - Batch scenario runs and display/tracking helpers

pub mod error;
pub mod assumptions;
pub mod estimate;
pub mod request;
pub mod report;
pub mod scenario;

// Re-export commonly used types
pub use error::EstimateError;
pub use assumptions::{Assumptions, ChurnAssumptions, RetentionAssumptions};
pub use estimate::{
    compute_churn_impact, compute_revenue_retained, ChurnInputs, ChurnModel, ChurnResult,
    RetentionInputs, RetentionModel, RetentionResult,
};
pub use request::{EstimateOutcome, EstimateRequest, ModelKind};
pub use scenario::ScenarioRunner;
