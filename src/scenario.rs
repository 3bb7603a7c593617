//! Scenario runner for batch estimates
//!
//! Holds the benchmark assumptions once, then runs any number of estimate
//! requests against them without re-reading CSV files.

use rayon::prelude::*;

use crate::assumptions::Assumptions;
use crate::error::EstimateError;
use crate::estimate::{ChurnModel, RetentionModel};
use crate::request::{EstimateOutcome, EstimateRequest};

/// Pre-loaded scenario runner
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::from_csv()?;
///
/// for members in [25.0, 50.0, 100.0] {
///     let request = EstimateRequest::Churn(ChurnInputs::new(members, 212.0));
///     let outcome = runner.run(&request)?;
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ScenarioRunner {
    assumptions: Assumptions,
    churn: ChurnModel,
    retention: RetentionModel,
}

impl ScenarioRunner {
    /// Create runner with the default benchmarks
    pub fn new() -> Self {
        Self::with_assumptions(Assumptions::default_benchmarks())
    }

    /// Create runner by loading benchmarks from CSV
    pub fn from_csv() -> Result<Self, EstimateError> {
        Ok(Self::with_assumptions(Assumptions::from_csv()?))
    }

    /// Create runner from a specific assumptions directory
    pub fn from_csv_path(path: &std::path::Path) -> Result<Self, EstimateError> {
        Ok(Self::with_assumptions(Assumptions::from_csv_path(path)?))
    }

    /// Create runner with pre-built assumptions
    pub fn with_assumptions(assumptions: Assumptions) -> Self {
        Self {
            assumptions,
            churn: ChurnModel::new(assumptions.churn),
            retention: RetentionModel::new(assumptions.retention),
        }
    }

    /// Run a single estimate
    pub fn run(&self, request: &EstimateRequest) -> Result<EstimateOutcome, EstimateError> {
        match request {
            EstimateRequest::Churn(inputs) => self.churn.compute(inputs).map(EstimateOutcome::Churn),
            EstimateRequest::Retention(inputs) => {
                self.retention.compute(inputs).map(EstimateOutcome::Retention)
            }
        }
    }

    /// Run many estimates in parallel. Output order matches input order and
    /// each request fails or succeeds on its own.
    pub fn run_batch(&self, requests: &[EstimateRequest]) -> Vec<Result<EstimateOutcome, EstimateError>> {
        requests.par_iter().map(|request| self.run(request)).collect()
    }

    pub fn assumptions(&self) -> &Assumptions {
        &self.assumptions
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assumptions::ChurnAssumptions;
    use crate::estimate::{ChurnInputs, RetentionInputs};

    #[test]
    fn test_run_dispatches_by_model() {
        let runner = ScenarioRunner::new();

        let outcome = runner.run(&EstimateRequest::Churn(ChurnInputs::new(50.0, 212.0))).unwrap();
        match outcome {
            EstimateOutcome::Churn(r) => assert_eq!(r.recovery_low, 16_472.0),
            other => panic!("unexpected outcome {:?}", other),
        }

        let outcome = runner
            .run(&EstimateRequest::Retention(RetentionInputs::new(100.0, 150.0)))
            .unwrap();
        assert!((outcome.headline_amount() - 1514.25).abs() < 1e-6);
    }

    #[test]
    fn test_scenario_runner_batch() {
        let runner = ScenarioRunner::new();

        let requests: Vec<_> = [25.0, 50.0, 100.0, f64::NAN]
            .iter()
            .map(|&members| EstimateRequest::Churn(ChurnInputs::new(members, 212.0)))
            .collect();

        let results = runner.run_batch(&requests);
        assert_eq!(results.len(), 4);
        assert!(results[3].is_err());

        // More members should mean a bigger recovery
        let amounts: Vec<f64> = results[..3].iter().map(|r| r.as_ref().unwrap().headline_amount()).collect();
        assert!(amounts[0] < amounts[1] && amounts[1] < amounts[2]);
    }

    #[test]
    fn test_custom_assumptions_used() {
        let mut assumptions = Assumptions::default_benchmarks();
        assumptions.churn = ChurnAssumptions {
            churn_rate: 0.5,
            ..Default::default()
        };
        let runner = ScenarioRunner::with_assumptions(assumptions);

        let outcome = runner.run(&EstimateRequest::Churn(ChurnInputs::new(50.0, 212.0))).unwrap();
        match outcome {
            EstimateOutcome::Churn(r) => assert_eq!(r.churned_members, 300.0),
            other => panic!("unexpected outcome {:?}", other),
        }
    }
}
