//! Load estimate scenarios from CSV

use super::{EstimateRequest, ModelKind};
use crate::error::EstimateError;
use csv::Reader;
use std::path::Path;

/// Raw CSV row matching scenarios.csv columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "ScenarioID")]
    scenario_id: u32,
    #[serde(rename = "Model")]
    model: String,
    #[serde(rename = "Volume")]
    volume: f64,
    #[serde(rename = "Value")]
    value: f64,
}

/// A scenario row: an id plus the estimate to run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scenario {
    pub scenario_id: u32,
    pub request: EstimateRequest,
}

impl CsvRow {
    fn to_scenario(self) -> Result<Scenario, EstimateError> {
        let kind = match self.model.trim().to_ascii_lowercase().as_str() {
            "churn" => ModelKind::Churn,
            "retention" => ModelKind::Retention,
            _ => return Err(EstimateError::UnknownModel(self.model)),
        };

        Ok(Scenario {
            scenario_id: self.scenario_id,
            request: EstimateRequest::from_volume_value(kind, self.volume, self.value),
        })
    }
}

/// Load all scenarios from a CSV file
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<Scenario>, EstimateError> {
    let reader = Reader::from_path(path)?;
    collect_scenarios(reader)
}

/// Load scenarios from any reader (e.g., string buffer, request body)
pub fn load_scenarios_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<Scenario>, EstimateError> {
    collect_scenarios(Reader::from_reader(reader))
}

/// Load scenarios from the default scenarios.csv location
pub fn load_default_scenarios() -> Result<Vec<Scenario>, EstimateError> {
    load_scenarios("data/scenarios.csv")
}

fn collect_scenarios<R: std::io::Read>(mut reader: Reader<R>) -> Result<Vec<Scenario>, EstimateError> {
    let mut scenarios = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        scenarios.push(row.to_scenario()?);
    }

    Ok(scenarios)
}
