//! Churn recovery model
//!
//! Estimates members lost over a year, the revenue they take with them, and
//! how much of it follow-ups recover. Every count and dollar figure is rounded
//! as soon as it is produced and later steps work from the rounded value, so
//! results come out to the whole person and the whole dollar.

use serde::{Deserialize, Serialize};

use super::round_half_up;
use crate::assumptions::ChurnAssumptions;
use crate::error::{ensure_finite, EstimateError};

const MONTHS_PER_YEAR: f64 = 12.0;

/// Studio figures the churn estimate is driven by
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChurnInputs {
    pub monthly_new_members: f64,
    pub lifetime_value_per_member: f64,
}

impl ChurnInputs {
    pub fn new(monthly_new_members: f64, lifetime_value_per_member: f64) -> Self {
        Self {
            monthly_new_members,
            lifetime_value_per_member,
        }
    }
}

/// Output of the churn recovery model
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChurnResult {
    pub annual_members: f64,
    /// Whole number of members, kept as `f64` so it never saturates
    pub churned_members: f64,
    /// Lifetime value walking out the door over the year
    pub annual_loss: f64,
    pub recovery_low: f64,
    pub recovery_high: f64,
    /// Net-of-cost ROI multiple. Negative when recovery is below cost.
    pub roi_low: f64,
    pub roi_high: f64,
}

impl ChurnResult {
    /// Average lifetime value behind the loss figure.
    /// `None` when nobody churned.
    pub fn average_lifetime_value(&self) -> Option<f64> {
        if self.churned_members == 0.0 {
            None
        } else {
            Some(self.annual_loss / self.churned_members)
        }
    }
}

/// Churn recovery model bound to a set of benchmarks
#[derive(Debug, Clone, Copy, Default)]
pub struct ChurnModel {
    assumptions: ChurnAssumptions,
}

impl ChurnModel {
    pub fn new(assumptions: ChurnAssumptions) -> Self {
        Self { assumptions }
    }

    pub fn assumptions(&self) -> &ChurnAssumptions {
        &self.assumptions
    }

    /// Run the estimate.
    ///
    /// Zero and negative inputs are accepted and give degenerate figures;
    /// only NaN and infinities are rejected.
    pub fn compute(&self, inputs: &ChurnInputs) -> Result<ChurnResult, EstimateError> {
        let members = ensure_finite("monthly_new_members", inputs.monthly_new_members)?;
        let ltv = ensure_finite("lifetime_value_per_member", inputs.lifetime_value_per_member)?;
        let a = &self.assumptions;

        let annual_members = members * MONTHS_PER_YEAR;
        let churned = round_half_up(annual_members * a.churn_rate);
        let annual_loss = churned * ltv;

        let recovery_low = round_half_up(annual_loss * a.recovery_low);
        let recovery_high = round_half_up(annual_loss * a.recovery_high);

        let roi_low = round_half_up((recovery_low - a.annual_cost) / a.annual_cost);
        let roi_high = round_half_up((recovery_high - a.annual_cost) / a.annual_cost);

        Ok(ChurnResult {
            annual_members,
            churned_members: churned,
            annual_loss,
            recovery_low,
            recovery_high,
            roi_low,
            roi_high,
        })
    }
}

/// Churn estimate against the default benchmarks
pub fn compute_churn_impact(
    monthly_new_members: f64,
    lifetime_value_per_member: f64,
) -> Result<ChurnResult, EstimateError> {
    ChurnModel::default().compute(&ChurnInputs::new(monthly_new_members, lifetime_value_per_member))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_studio() {
        let result = compute_churn_impact(50.0, 212.0).unwrap();

        assert_eq!(result.annual_members, 600.0);
        assert_eq!(result.churned_members, 222.0);
        assert_eq!(result.annual_loss, 47_064.0);
        assert_eq!(result.recovery_low, 16_472.0);
        assert_eq!(result.recovery_high, 21_649.0);
        assert_eq!(result.roi_low, 46.0);
        assert_eq!(result.roi_high, 61.0);
    }

    #[test]
    fn test_slider_extremes() {
        // 120 * 0.37 = 44.4 -> 44 churned
        let small = compute_churn_impact(10.0, 100.0).unwrap();
        assert_eq!(small.churned_members, 44.0);
        assert_eq!(small.annual_loss, 4_400.0);
        assert_eq!(small.recovery_low, 1_540.0);
        assert_eq!(small.recovery_high, 2_024.0);
        assert_eq!(small.roi_low, 3.0);
        assert_eq!(small.roi_high, 5.0);

        // 2400 * 0.37 = 888
        let large = compute_churn_impact(200.0, 500.0).unwrap();
        assert_eq!(large.churned_members, 888.0);
        assert_eq!(large.annual_loss, 444_000.0);
        assert_eq!(large.recovery_low, 155_400.0);
        assert_eq!(large.recovery_high, 204_240.0);
        assert_eq!(large.roi_low, 446.0);
        assert_eq!(large.roi_high, 586.0);
    }

    #[test]
    fn test_zero_members() {
        let result = compute_churn_impact(0.0, 212.0).unwrap();

        assert_eq!(result.annual_members, 0.0);
        assert_eq!(result.churned_members, 0.0);
        assert_eq!(result.annual_loss, 0.0);
        assert_eq!(result.recovery_low, 0.0);
        assert_eq!(result.recovery_high, 0.0);
        // (0 - 348) / 348 = -1
        assert_eq!(result.roi_low, -1.0);
        assert_eq!(result.roi_high, -1.0);
        assert_eq!(result.average_lifetime_value(), None);
    }

    #[test]
    fn test_negative_roi_not_clamped() {
        // 12 churned * 50 = 600 loss, recovery 210..276 is below the 348 cost
        let result = compute_churn_impact(2.7, 50.0).unwrap();
        assert_eq!(result.churned_members, 12.0);
        assert_eq!(result.recovery_low, 210.0);
        assert_eq!(result.roi_low, 0.0);
        assert!(result.recovery_low < 348.0);

        let result = compute_churn_impact(1.0, 10.0).unwrap();
        assert!(result.roi_high < 0.0);
    }

    #[test]
    fn test_negative_inputs_do_not_fail() {
        let result = compute_churn_impact(-10.0, 212.0).unwrap();
        assert_eq!(result.annual_members, -120.0);
        assert!(result.annual_loss <= 0.0);
    }

    #[test]
    fn test_huge_inputs_stay_consistent() {
        // far past i64::MAX churned members
        let result = compute_churn_impact(1e19, 212.0).unwrap();
        assert!(result.churned_members > i64::MAX as f64);
        assert_eq!(result.churned_members.fract(), 0.0);
        assert_eq!(result.annual_loss, result.churned_members * 212.0);

        let avg = result.average_lifetime_value().unwrap();
        assert!((avg - 212.0).abs() < 1e-9 * 212.0, "avg={}", avg);
        assert!(result.roi_low <= result.roi_high);
        assert!(result.roi_high > i64::MAX as f64);
    }

    #[test]
    fn test_non_finite_inputs_rejected() {
        assert!(matches!(
            compute_churn_impact(f64::NAN, 212.0),
            Err(EstimateError::InvalidInput { field: "monthly_new_members", .. })
        ));
        assert!(matches!(
            compute_churn_impact(50.0, f64::INFINITY),
            Err(EstimateError::InvalidInput { field: "lifetime_value_per_member", .. })
        ));
    }

    #[test]
    fn test_bounds_ordered_for_non_negative_inputs() {
        for members in (0..=200).step_by(5) {
            for ltv in (0..=500).step_by(10) {
                let r = compute_churn_impact(members as f64, ltv as f64).unwrap();
                assert!(r.recovery_low <= r.recovery_high, "members={} ltv={}", members, ltv);
                assert!(r.roi_low <= r.roi_high, "members={} ltv={}", members, ltv);
            }
        }
    }

    #[test]
    fn test_deterministic() {
        let model = ChurnModel::default();
        let inputs = ChurnInputs::new(85.0, 330.0);
        let first = model.compute(&inputs).unwrap();
        let second = model.compute(&inputs).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.annual_loss.to_bits(), second.annual_loss.to_bits());
        assert_eq!(first.recovery_high.to_bits(), second.recovery_high.to_bits());
    }

    #[test]
    fn test_alternate_benchmarks() {
        let model = ChurnModel::new(ChurnAssumptions {
            churn_rate: 0.5,
            recovery_low: 0.1,
            recovery_high: 0.2,
            annual_cost: 1_000.0,
        });
        let result = model.compute(&ChurnInputs::new(10.0, 100.0)).unwrap();

        assert_eq!(result.churned_members, 60.0);
        assert_eq!(result.annual_loss, 6_000.0);
        assert_eq!(result.recovery_low, 600.0);
        assert_eq!(result.recovery_high, 1_200.0);
        assert_eq!(result.roi_low, 0.0);
        assert_eq!(result.roi_high, 0.0);
    }

    #[test]
    fn test_average_lifetime_value() {
        let result = compute_churn_impact(50.0, 212.0).unwrap();
        assert_eq!(result.average_lifetime_value(), Some(212.0));
    }
}
