//! Call-to-action tracking payloads
//!
//! Builds the flat key-value payload reported when a visitor clicks the
//! call to action. Delivery is up to the sink. The crate only ships a sink
//! that writes to the log.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::estimate::{ChurnInputs, ChurnResult, RetentionInputs, RetentionResult};
use crate::request::{EstimateOutcome, EstimateRequest};

/// Event name for the churn calculator's call to action
pub const CHURN_CTA_EVENT: &str = "calculator_cta_click";

/// Event name for the retention calculator's call to action
pub const RETENTION_CTA_EVENT: &str = "fitgrid_calculator_cta_click";

/// One tracking event: a name plus flat numeric properties
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackingEvent {
    pub name: &'static str,
    pub occurred_at: DateTime<Utc>,
    pub properties: BTreeMap<&'static str, f64>,
}

impl TrackingEvent {
    pub fn churn_cta(inputs: &ChurnInputs, result: &ChurnResult) -> Self {
        let properties = BTreeMap::from([
            ("monthly_members", inputs.monthly_new_members),
            ("lifetime_value", inputs.lifetime_value_per_member),
            ("annual_loss", result.annual_loss),
            ("recovery_amount", result.recovery_high),
        ]);
        Self::new(CHURN_CTA_EVENT, properties)
    }

    pub fn retention_cta(inputs: &RetentionInputs, result: &RetentionResult) -> Self {
        let properties = BTreeMap::from([
            ("new_clients", inputs.new_clients_per_month),
            ("avg_revenue_3m", inputs.avg_revenue_per_client),
            ("incremental_returns", result.incremental_returns),
            ("revenue_retained", result.revenue_retained),
        ]);
        Self::new(RETENTION_CTA_EVENT, properties)
    }

    /// Event for the last computed result. `None` if request and outcome
    /// belong to different models.
    pub fn for_outcome(request: &EstimateRequest, outcome: &EstimateOutcome) -> Option<Self> {
        match (request, outcome) {
            (EstimateRequest::Churn(i), EstimateOutcome::Churn(r)) => Some(Self::churn_cta(i, r)),
            (EstimateRequest::Retention(i), EstimateOutcome::Retention(r)) => {
                Some(Self::retention_cta(i, r))
            }
            _ => None,
        }
    }

    fn new(name: &'static str, properties: BTreeMap<&'static str, f64>) -> Self {
        Self {
            name,
            occurred_at: Utc::now(),
            properties,
        }
    }
}

/// Receives tracking events. One-way: no response is expected.
pub trait TrackingSink {
    fn track(&self, event: &TrackingEvent);
}

/// Writes events to the log at info level
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl TrackingSink for LogSink {
    fn track(&self, event: &TrackingEvent) {
        match serde_json::to_string(event) {
            Ok(json) => log::info!("tracking event {}", json),
            Err(e) => log::warn!("could not serialize tracking event {}: {}", event.name, e),
        }
    }
}
