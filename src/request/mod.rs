//! Estimate requests and scenario loading

mod data;
pub mod loader;

pub use data::{EstimateOutcome, EstimateRequest, ModelKind};
pub use loader::{load_default_scenarios, load_scenarios, load_scenarios_from_reader, Scenario};
