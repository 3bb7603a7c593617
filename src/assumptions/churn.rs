//! Benchmarks for the churn recovery model

use serde::{Deserialize, Serialize};

use crate::error::EstimateError;

/// Industry average annual attrition (37%)
pub const DEFAULT_CHURN_RATE: f64 = 0.37;

/// Low end of churn reduction from automated follow-ups (35%)
pub const DEFAULT_RECOVERY_LOW: f64 = 0.35;

/// High end of churn reduction from automated follow-ups (46%)
pub const DEFAULT_RECOVERY_HIGH: f64 = 0.46;

/// Subscription cost per year ($29/month x 12)
pub const DEFAULT_ANNUAL_COST: f64 = 348.0;

/// Constants driving the churn recovery estimate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChurnAssumptions {
    /// Fraction of a year's new members lost within the year
    pub churn_rate: f64,

    /// Fraction of the churn loss recovered, pessimistic bound
    pub recovery_low: f64,

    /// Fraction of the churn loss recovered, optimistic bound
    pub recovery_high: f64,

    /// Annual subscription cost the ROI multiple is measured against
    pub annual_cost: f64,
}

impl Default for ChurnAssumptions {
    fn default() -> Self {
        Self {
            churn_rate: DEFAULT_CHURN_RATE,
            recovery_low: DEFAULT_RECOVERY_LOW,
            recovery_high: DEFAULT_RECOVERY_HIGH,
            annual_cost: DEFAULT_ANNUAL_COST,
        }
    }
}

impl ChurnAssumptions {
    /// Check the constants before they reach the engine
    pub fn validate(&self) -> Result<(), EstimateError> {
        super::check_rate("churn_rate", self.churn_rate)?;
        super::check_rate("recovery_low", self.recovery_low)?;
        super::check_rate("recovery_high", self.recovery_high)?;

        if self.recovery_low > self.recovery_high {
            return Err(EstimateError::assumption(
                "recovery_low",
                format!("{} exceeds recovery_high {}", self.recovery_low, self.recovery_high),
            ));
        }

        // Divisor of the ROI multiple
        if !self.annual_cost.is_finite() || self.annual_cost <= 0.0 {
            return Err(EstimateError::assumption(
                "annual_cost",
                format!("{} must be a positive amount", self.annual_cost),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_benchmarks_are_valid() {
        let churn = ChurnAssumptions::default();
        assert_eq!(churn.churn_rate, 0.37);
        assert_eq!(churn.annual_cost, 29.0 * 12.0);
        assert!(churn.validate().is_ok());
    }

    #[test]
    fn test_inverted_recovery_bounds_rejected() {
        let churn = ChurnAssumptions {
            recovery_low: 0.5,
            recovery_high: 0.4,
            ..Default::default()
        };
        assert!(churn.validate().is_err());
    }

    #[test]
    fn test_zero_cost_rejected() {
        let churn = ChurnAssumptions {
            annual_cost: 0.0,
            ..Default::default()
        };
        assert!(churn.validate().is_err());
    }
}
