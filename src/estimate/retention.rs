//! Follow-up reach/lift retention model
//!
//! Unlike the churn model nothing is rounded here. Returns are fractional
//! expected counts and revenue is left to the caller to round for display.

use serde::{Deserialize, Serialize};

use crate::assumptions::RetentionAssumptions;
use crate::error::{ensure_finite, EstimateError};

/// Studio figures the retention estimate is driven by
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RetentionInputs {
    pub new_clients_per_month: f64,
    /// Revenue per new client over the first three months
    pub avg_revenue_per_client: f64,
}

impl RetentionInputs {
    pub fn new(new_clients_per_month: f64, avg_revenue_per_client: f64) -> Self {
        Self {
            new_clients_per_month,
            avg_revenue_per_client,
        }
    }
}

/// Output of the retention lift model
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RetentionResult {
    /// Expected returning clients with no follow-ups
    pub returns_before: f64,
    /// Expected returning clients with follow-ups
    pub returns_after: f64,
    pub incremental_returns: f64,
    pub revenue_retained: f64,
}

/// Retention lift model bound to a set of benchmarks
#[derive(Debug, Clone, Copy, Default)]
pub struct RetentionModel {
    assumptions: RetentionAssumptions,
}

impl RetentionModel {
    pub fn new(assumptions: RetentionAssumptions) -> Self {
        Self { assumptions }
    }

    pub fn assumptions(&self) -> &RetentionAssumptions {
        &self.assumptions
    }

    /// Run the estimate. Only NaN and infinities are rejected.
    pub fn compute(&self, inputs: &RetentionInputs) -> Result<RetentionResult, EstimateError> {
        let clients = ensure_finite("new_clients_per_month", inputs.new_clients_per_month)?;
        let revenue = ensure_finite("avg_revenue_per_client", inputs.avg_revenue_per_client)?;
        let a = &self.assumptions;

        let baseline = a.baseline_return_rate;
        let lifted = a.post_lift_return_rate();
        let reach = a.follow_up_reach;

        let returns_before = clients * baseline;
        // reached share gets the lifted rate, the rest keeps the baseline
        let returns_after = clients * (reach * lifted + (1.0 - reach) * baseline);
        let incremental_returns = returns_after - returns_before;

        Ok(RetentionResult {
            returns_before,
            returns_after,
            incremental_returns,
            revenue_retained: incremental_returns * revenue,
        })
    }
}

/// Retention estimate against the default benchmarks
pub fn compute_revenue_retained(
    new_clients_per_month: f64,
    avg_revenue_per_client: f64,
) -> Result<RetentionResult, EstimateError> {
    RetentionModel::default().compute(&RetentionInputs::new(new_clients_per_month, avg_revenue_per_client))
}
