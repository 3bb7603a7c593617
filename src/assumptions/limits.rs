//! Input ranges offered by the calculator controls
//!
//! The engine never enforces these. Callers that stand in for the slider
//! controls (CLI, HTTP handler) clamp with them before calling the engine.

use serde::{Deserialize, Serialize};

/// Range, step and starting value of one numeric input
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InputRange {
    pub min: f64,
    /// `None` means unbounded above
    pub max: Option<f64>,
    pub step: f64,
    pub default_value: f64,
}

impl InputRange {
    pub const fn new(min: f64, max: Option<f64>, step: f64, default_value: f64) -> Self {
        Self { min, max, step, default_value }
    }

    /// Clamp a value into range. NaN falls back to `min`.
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.min;
        }
        let value = value.max(self.min);
        match self.max {
            Some(max) => value.min(max),
            None => value,
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && self.max.map_or(true, |max| value <= max)
    }
}

/// New members per month (churn model)
pub const MONTHLY_NEW_MEMBERS: InputRange = InputRange::new(10.0, Some(200.0), 5.0, 50.0);

/// Average lifetime value per member (churn model)
pub const LIFETIME_VALUE: InputRange = InputRange::new(100.0, Some(500.0), 10.0, 212.0);

/// New first-time clients per month (retention model)
pub const NEW_CLIENTS: InputRange = InputRange::new(0.0, Some(500.0), 1.0, 100.0);

/// Average revenue per new client over the first three months (retention model)
pub const AVG_REVENUE_3M: InputRange = InputRange::new(0.0, None, 1.0, 150.0);
