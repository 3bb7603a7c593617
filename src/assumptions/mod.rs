//! Benchmark assumptions for the churn and retention models, plus input limits

mod churn;
mod retention;
pub mod limits;
pub mod loader;

pub use churn::{
    ChurnAssumptions, DEFAULT_ANNUAL_COST, DEFAULT_CHURN_RATE, DEFAULT_RECOVERY_HIGH,
    DEFAULT_RECOVERY_LOW,
};
pub use retention::{
    RetentionAssumptions, DEFAULT_BASELINE_RETURN_RATE, DEFAULT_FOLLOW_UP_REACH,
    DEFAULT_OPEN_RATE, DEFAULT_PROBABILITY_CAP, DEFAULT_RELATIVE_LIFT, DEFAULT_TIMEFRAME_MONTHS,
};
pub use limits::InputRange;
pub use loader::LoadedAssumptions;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::EstimateError;

/// Container for all benchmark assumptions
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Assumptions {
    pub churn: ChurnAssumptions,
    pub retention: RetentionAssumptions,
}

impl Assumptions {
    /// Published marketing benchmarks
    pub fn default_benchmarks() -> Self {
        Self::default()
    }

    /// Load assumptions from CSV in the default location (data/assumptions/)
    pub fn from_csv() -> Result<Self, EstimateError> {
        Self::from_csv_path(Path::new(loader::DEFAULT_ASSUMPTIONS_PATH))
    }

    /// Load assumptions from CSV in a specific directory
    pub fn from_csv_path(path: &Path) -> Result<Self, EstimateError> {
        let loaded = LoadedAssumptions::load_from(path)?;
        Self::from_loaded(&loaded)
    }

    /// Apply loaded values over the default benchmarks and validate the result.
    /// Names missing from the file keep their default.
    pub fn from_loaded(loaded: &LoadedAssumptions) -> Result<Self, EstimateError> {
        let mut assumptions = Self::default_benchmarks();

        for (name, &value) in &loaded.values {
            let churn = &mut assumptions.churn;
            let retention = &mut assumptions.retention;
            match name.as_str() {
                "churn_rate" => churn.churn_rate = value,
                "recovery_low" => churn.recovery_low = value,
                "recovery_high" => churn.recovery_high = value,
                "annual_cost" => churn.annual_cost = value,
                "baseline_return_rate" => retention.baseline_return_rate = value,
                "follow_up_reach" => retention.follow_up_reach = value,
                "open_rate" => retention.open_rate = value,
                "relative_lift" => retention.relative_lift = value,
                "probability_cap" => retention.probability_cap = value,
                "timeframe_months" => {
                    if value < 1.0 || value.fract() != 0.0 {
                        return Err(EstimateError::assumption(
                            "timeframe_months",
                            format!("{} is not a whole number of months", value),
                        ));
                    }
                    retention.timeframe_months = value as u32;
                }
                other => log::warn!("ignoring unknown benchmark `{}`", other),
            }
        }

        assumptions.validate()?;
        log::debug!("benchmark assumptions: {:?}", assumptions);
        Ok(assumptions)
    }

    pub fn validate(&self) -> Result<(), EstimateError> {
        self.churn.validate()?;
        self.retention.validate()
    }
}

/// Probability-like constants must be finite and within [0, 1]
fn check_rate(name: &str, value: f64) -> Result<(), EstimateError> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(EstimateError::assumption(name, format!("{} must be within [0, 1]", value)))
    }
}
