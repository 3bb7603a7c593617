//! Benchmarks for the follow-up reach/lift retention model
//!
//! A reached client returns with the lifted probability, an unreached client
//! keeps the baseline probability.

use serde::{Deserialize, Serialize};

use crate::error::EstimateError;

/// New clients returning for 2+ visits within 30 days without follow-ups
pub const DEFAULT_BASELINE_RETURN_RATE: f64 = 0.33;

/// Share of first-time clients that receive a follow-up message
pub const DEFAULT_FOLLOW_UP_REACH: f64 = 0.90;

/// Average message open rate. Informational only
pub const DEFAULT_OPEN_RATE: f64 = 0.81;

/// Relative increase in return rate after a follow-up (+35%)
pub const DEFAULT_RELATIVE_LIFT: f64 = 0.35;

/// Upper bound on any return probability
pub const DEFAULT_PROBABILITY_CAP: f64 = 1.0;

/// Window the revenue inputs and outputs are measured over
pub const DEFAULT_TIMEFRAME_MONTHS: u32 = 3;

/// Constants driving the retention lift estimate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RetentionAssumptions {
    pub baseline_return_rate: f64,
    pub follow_up_reach: f64,
    /// Reported alongside results, never used in the revenue math
    pub open_rate: f64,
    pub relative_lift: f64,
    pub probability_cap: f64,
    pub timeframe_months: u32,
}

impl Default for RetentionAssumptions {
    fn default() -> Self {
        Self {
            baseline_return_rate: DEFAULT_BASELINE_RETURN_RATE,
            follow_up_reach: DEFAULT_FOLLOW_UP_REACH,
            open_rate: DEFAULT_OPEN_RATE,
            relative_lift: DEFAULT_RELATIVE_LIFT,
            probability_cap: DEFAULT_PROBABILITY_CAP,
            timeframe_months: DEFAULT_TIMEFRAME_MONTHS,
        }
    }
}

impl RetentionAssumptions {
    /// Return probability of a client who received a follow-up.
    /// Never exceeds `probability_cap`, whatever the lift.
    pub fn post_lift_return_rate(&self) -> f64 {
        (self.baseline_return_rate * (1.0 + self.relative_lift)).min(self.probability_cap)
    }

    /// Check the constants before they reach the engine
    pub fn validate(&self) -> Result<(), EstimateError> {
        super::check_rate("baseline_return_rate", self.baseline_return_rate)?;
        super::check_rate("follow_up_reach", self.follow_up_reach)?;
        super::check_rate("open_rate", self.open_rate)?;
        super::check_rate("probability_cap", self.probability_cap)?;

        if !self.relative_lift.is_finite() {
            return Err(EstimateError::assumption(
                "relative_lift",
                format!("{} is not a finite number", self.relative_lift),
            ));
        }

        Ok(())
    }
}
