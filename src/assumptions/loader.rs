//! CSV-based benchmark loader
//!
//! Loads benchmark constants from `Name,Value` rows in data/assumptions/benchmarks.csv

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::EstimateError;

/// Default path to assumptions directory
pub const DEFAULT_ASSUMPTIONS_PATH: &str = "data/assumptions";

/// File holding the benchmark constants inside the assumptions directory
pub const BENCHMARKS_FILE: &str = "benchmarks.csv";

/// Raw benchmark values keyed by name
#[derive(Debug, Clone, Default)]
pub struct LoadedAssumptions {
    pub values: HashMap<String, f64>,
}

impl LoadedAssumptions {
    /// Load benchmarks from the default path
    pub fn load_default() -> Result<Self, EstimateError> {
        Self::load_from(Path::new(DEFAULT_ASSUMPTIONS_PATH))
    }

    /// Load benchmarks from a specific assumptions directory
    pub fn load_from(path: &Path) -> Result<Self, EstimateError> {
        let file = File::open(path.join(BENCHMARKS_FILE))?;
        let loaded = Self::load_from_reader(file)?;
        log::debug!("loaded {} benchmark values from {}", loaded.values.len(), path.display());
        Ok(loaded)
    }

    /// Load benchmarks from any reader (e.g., string buffer)
    pub fn load_from_reader<R: Read>(reader: R) -> Result<Self, EstimateError> {
        let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
        let mut values = HashMap::new();

        for result in reader.records() {
            let record = result?;
            let line = record.position().map_or(0, |p| p.line());
            let name = record
                .get(0)
                .ok_or(EstimateError::MissingColumn { line, column: "Name" })?;
            let value: f64 = record
                .get(1)
                .ok_or(EstimateError::MissingColumn { line, column: "Value" })?
                .parse()?;
            values.insert(name.to_string(), value);
        }

        Ok(Self { values })
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_default_benchmarks() {
        let result = LoadedAssumptions::load_default();
        assert!(result.is_ok(), "Failed to load benchmarks: {:?}", result.err());

        let loaded = result.unwrap();
        assert_eq!(loaded.get("churn_rate"), Some(0.37));
        assert_eq!(loaded.get("annual_cost"), Some(348.0));
        assert_eq!(loaded.get("relative_lift"), Some(0.35));
    }

    #[test]
    fn test_load_from_reader() {
        let csv = "Name,Value\nchurn_rate, 0.4\nannual_cost,600\n";
        let loaded = LoadedAssumptions::load_from_reader(csv.as_bytes()).unwrap();
        assert_eq!(loaded.get("churn_rate"), Some(0.4));
        assert_eq!(loaded.get("annual_cost"), Some(600.0));
        assert_eq!(loaded.get("recovery_low"), None);
    }

    #[test]
    fn test_single_column_file_is_an_error() {
        let csv = "Name\nchurn_rate\n";
        let err = LoadedAssumptions::load_from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, EstimateError::MissingColumn { column: "Value", .. }));
    }

    #[test]
    fn test_bad_number_is_an_error() {
        let csv = "Name,Value\nchurn_rate,lots\n";
        let err = LoadedAssumptions::load_from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, EstimateError::ParseFloat(_)));
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let err = LoadedAssumptions::load_from(Path::new("does/not/exist")).unwrap_err();
        assert!(matches!(err, EstimateError::Io(_)));
    }
}
