//! Display-ready summaries of estimate outcomes

use serde::Serialize;

use super::format::{
    format_compact_currency, format_currency, format_multiple_range, format_whole_count,
};
use crate::estimate::{ChurnResult, RetentionResult};
use crate::request::EstimateOutcome;

/// Strings shown for a churn estimate
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChurnSummary {
    pub annual_loss: String,
    pub loss_breakdown: String,
    pub recovery_range: String,
    pub roi: String,
    pub call_to_action: String,
}

impl ChurnSummary {
    pub fn from_result(result: &ChurnResult) -> Self {
        // nobody churned -> no average to show
        let loss_breakdown = match result.average_lifetime_value() {
            Some(avg) => format!(
                "{} lost members × {} avg LTV",
                result.churned_members,
                format_currency(avg)
            ),
            None => format!("{} lost members", result.churned_members),
        };

        Self {
            annual_loss: format_currency(result.annual_loss),
            loss_breakdown,
            recovery_range: format!(
                "Recover {} - {}/year",
                format_currency(result.recovery_low),
                format_currency(result.recovery_high)
            ),
            roi: format!(
                "Your ROI: {} in year one",
                format_multiple_range(result.roi_low, result.roi_high)
            ),
            call_to_action: format!(
                "Recover My {}-{}",
                format_compact_currency(result.recovery_low),
                format_compact_currency(result.recovery_high)
            ),
        }
    }
}

/// Strings shown for a retention estimate
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RetentionSummary {
    pub revenue_retained: String,
    pub incremental_clients: u64,
    pub incremental_note: String,
    pub call_to_action: String,
}

impl RetentionSummary {
    pub fn from_result(result: &RetentionResult) -> Self {
        let revenue = format_currency(result.revenue_retained);
        let clients = format_whole_count(result.incremental_returns);

        Self {
            incremental_note: format!(
                "≈ {} newcomers who would've churned now book again",
                clients
            ),
            call_to_action: format!("Retain {}/month", revenue),
            revenue_retained: revenue,
            incremental_clients: clients,
        }
    }
}

/// Summary for either model
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum Summary {
    Churn(ChurnSummary),
    Retention(RetentionSummary),
}

impl Summary {
    pub fn from_outcome(outcome: &EstimateOutcome) -> Self {
        match outcome {
            EstimateOutcome::Churn(r) => Summary::Churn(ChurnSummary::from_result(r)),
            EstimateOutcome::Retention(r) => Summary::Retention(RetentionSummary::from_result(r)),
        }
    }

    /// Lines for terminal output
    pub fn lines(&self) -> Vec<String> {
        match self {
            Summary::Churn(s) => vec![
                format!("Annual revenue lost to churn: {}", s.annual_loss),
                format!("  {}", s.loss_breakdown),
                s.recovery_range.clone(),
                s.roi.clone(),
                format!("[{}]", s.call_to_action),
            ],
            Summary::Retention(s) => vec![
                format!("Revenue retained: {}", s.revenue_retained),
                format!("  {}", s.incremental_note),
                format!("[{}]", s.call_to_action),
            ],
        }
    }
}
