//! Run estimates for every scenario in a CSV file
//!
//! Usage: run_batch [SCENARIOS_CSV] [OUTPUT_CSV]
//! Defaults to data/scenarios.csv and batch_output.csv.
//! Set ASSUMPTIONS_PATH to load benchmarks from a directory instead of the defaults.

use std::env;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::time::Instant;

use anyhow::Context;
use churn_estimator::request::{load_scenarios, Scenario};
use churn_estimator::{Assumptions, EstimateError, EstimateOutcome, ScenarioRunner};

const OUTPUT_HEADER: &str = "ScenarioID,Model,Volume,Value,AnnualMembers,ChurnedMembers,AnnualLoss,RecoveryLow,RecoveryHigh,RoiLow,RoiHigh,ReturnsBefore,ReturnsAfter,IncrementalReturns,RevenueRetained,Error";

/// One output line (without newline), always one field per header column
fn render_row(scenario: &Scenario, result: &Result<EstimateOutcome, EstimateError>) -> String {
    let (volume, value) = scenario.request.volume_value();
    let prefix = format!("{},{},{},{}", scenario.scenario_id, scenario.request.kind().as_str(), volume, value);

    match result {
        Ok(EstimateOutcome::Churn(r)) => format!(
            "{},{},{},{:.2},{:.0},{:.0},{},{},,,,,",
            prefix, r.annual_members, r.churned_members, r.annual_loss,
            r.recovery_low, r.recovery_high, r.roi_low, r.roi_high,
        ),
        Ok(EstimateOutcome::Retention(r)) => format!(
            "{},,,,,,,,{:.6},{:.6},{:.6},{:.2},",
            prefix, r.returns_before, r.returns_after, r.incremental_returns, r.revenue_retained,
        ),
        Err(e) => format!("{},,,,,,,,,,,,\"{}\"", prefix, e.to_string().replace('"', "\"\"")),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = env::args().skip(1);
    let input_path = args.next().unwrap_or_else(|| "data/scenarios.csv".to_string());
    let output_path = args.next().unwrap_or_else(|| "batch_output.csv".to_string());

    let assumptions = match env::var("ASSUMPTIONS_PATH") {
        Ok(dir) => Assumptions::from_csv_path(Path::new(&dir))
            .with_context(|| format!("loading benchmarks from {}", dir))?,
        Err(_) => Assumptions::default_benchmarks(),
    };
    let runner = ScenarioRunner::with_assumptions(assumptions);

    let start = Instant::now();
    println!("Loading scenarios from {}...", input_path);
    let scenarios = load_scenarios(&input_path)
        .with_context(|| format!("loading scenarios from {}", input_path))?;
    println!("Loaded {} scenarios in {:?}", scenarios.len(), start.elapsed());

    let requests: Vec<_> = scenarios.iter().map(|s| s.request).collect();
    let results = runner.run_batch(&requests);

    let mut file = File::create(&output_path)
        .with_context(|| format!("creating {}", output_path))?;
    writeln!(file, "{}", OUTPUT_HEADER)?;

    let mut failures = 0usize;
    for (scenario, result) in scenarios.iter().zip(&results) {
        if let Err(e) = result {
            failures += 1;
            log::warn!("scenario {} failed: {}", scenario.scenario_id, e);
        }
        writeln!(file, "{}", render_row(scenario, result))?;
    }

    println!("Output written to {}", output_path);
    println!("  Scenarios: {}  Failed: {}", scenarios.len(), failures);
    println!("Total time: {:?}", start.elapsed());

    Ok(())
}
