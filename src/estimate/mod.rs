//! Estimation engine: churn recovery and retention lift models
//!
//! Both models are pure. The same inputs and benchmarks always give the same
//! result and nothing is cached between calls.

mod churn;
mod retention;

pub use churn::{compute_churn_impact, ChurnInputs, ChurnModel, ChurnResult};
pub use retention::{compute_revenue_retained, RetentionInputs, RetentionModel, RetentionResult};

/// Round to the nearest whole number, ties toward positive infinity.
/// `2.5 -> 3`, `-2.5 -> -2`. Never returns negative zero.
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    // exact for every finite f64
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor + 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(2.49), 2.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(-2.51), -3.0);
        assert_eq!(round_half_up(16_472.4), 16_472.0);
        assert_eq!(round_half_up(0.0), 0.0);
        assert_eq!(round_half_up(-1.0), -1.0);
        assert!(round_half_up(-0.0).is_sign_positive());
    }
}
