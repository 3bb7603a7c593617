//! Estimate request and outcome types

use serde::{Deserialize, Serialize};

use crate::assumptions::limits;
use crate::estimate::{ChurnInputs, ChurnResult, RetentionInputs, RetentionResult};

/// Which model an estimate is run against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelKind {
    Churn,
    Retention,
}

impl ModelKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelKind::Churn => "churn",
            ModelKind::Retention => "retention",
        }
    }
}

/// One estimate to run, tagged by model
///
/// JSON form: `{"model": "churn", "monthly_new_members": 50, "lifetime_value_per_member": 212}`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum EstimateRequest {
    Churn(ChurnInputs),
    Retention(RetentionInputs),
}

impl EstimateRequest {
    /// Build a request from the generic volume/value pair used in scenario files.
    /// Volume is members or clients per month, value is LTV or 3-month revenue.
    pub fn from_volume_value(kind: ModelKind, volume: f64, value: f64) -> Self {
        match kind {
            ModelKind::Churn => EstimateRequest::Churn(ChurnInputs::new(volume, value)),
            ModelKind::Retention => EstimateRequest::Retention(RetentionInputs::new(volume, value)),
        }
    }

    pub fn kind(&self) -> ModelKind {
        match self {
            EstimateRequest::Churn(_) => ModelKind::Churn,
            EstimateRequest::Retention(_) => ModelKind::Retention,
        }
    }

    /// `(volume, value)` pair, the inverse of `from_volume_value`
    pub fn volume_value(&self) -> (f64, f64) {
        match self {
            EstimateRequest::Churn(i) => (i.monthly_new_members, i.lifetime_value_per_member),
            EstimateRequest::Retention(i) => (i.new_clients_per_month, i.avg_revenue_per_client),
        }
    }

    /// Clamp inputs to the ranges the calculator controls allow
    pub fn clamped(&self) -> Self {
        match self {
            EstimateRequest::Churn(i) => EstimateRequest::Churn(ChurnInputs::new(
                limits::MONTHLY_NEW_MEMBERS.clamp(i.monthly_new_members),
                limits::LIFETIME_VALUE.clamp(i.lifetime_value_per_member),
            )),
            EstimateRequest::Retention(i) => EstimateRequest::Retention(RetentionInputs::new(
                limits::NEW_CLIENTS.clamp(i.new_clients_per_month),
                limits::AVG_REVENUE_3M.clamp(i.avg_revenue_per_client),
            )),
        }
    }
}

/// Result of one estimate, tagged by model
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum EstimateOutcome {
    Churn(ChurnResult),
    Retention(RetentionResult),
}

impl EstimateOutcome {
    pub fn kind(&self) -> ModelKind {
        match self {
            EstimateOutcome::Churn(_) => ModelKind::Churn,
            EstimateOutcome::Retention(_) => ModelKind::Retention,
        }
    }

    /// Headline dollar figure: upper recovery bound or revenue retained
    pub fn headline_amount(&self) -> f64 {
        match self {
            EstimateOutcome::Churn(r) => r.recovery_high,
            EstimateOutcome::Retention(r) => r.revenue_retained,
        }
    }
}
