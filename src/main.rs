//! Churn Estimator CLI
//!
//! Command-line interface for running a single churn or retention estimate

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use churn_estimator::assumptions::limits;
use churn_estimator::report::{LogSink, Summary, TrackingEvent, TrackingSink};
use churn_estimator::{
    Assumptions, ChurnInputs, EstimateRequest, RetentionInputs, ScenarioRunner,
};

#[derive(Debug, Parser)]
#[command(name = "churn_estimator", version, about = "Estimate churn losses and follow-up recovery")]
struct Cli {
    /// Directory holding benchmarks.csv (defaults to the built-in benchmarks)
    #[arg(long, global = true)]
    assumptions: Option<PathBuf>,

    /// Pass inputs through without clamping them to the calculator ranges
    #[arg(long, global = true)]
    no_clamp: bool,

    /// Print the raw outcome as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Log a call-to-action tracking event for the result
    #[arg(long, global = true)]
    track: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Annual churn loss and recovery range
    Churn {
        /// New members per month
        #[arg(long, default_value_t = limits::MONTHLY_NEW_MEMBERS.default_value)]
        members: f64,
        /// Average lifetime value per member
        #[arg(long, default_value_t = limits::LIFETIME_VALUE.default_value)]
        ltv: f64,
    },
    /// Revenue retained by follow-ups over three months
    Retention {
        /// New first-time clients per month
        #[arg(long, default_value_t = limits::NEW_CLIENTS.default_value)]
        clients: f64,
        /// Average revenue per new client over three months
        #[arg(long, default_value_t = limits::AVG_REVENUE_3M.default_value)]
        revenue: f64,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let assumptions = match &cli.assumptions {
        Some(path) => Assumptions::from_csv_path(path)
            .with_context(|| format!("loading benchmarks from {}", path.display()))?,
        None => Assumptions::default_benchmarks(),
    };
    let runner = ScenarioRunner::with_assumptions(assumptions);

    let request = match cli.command {
        Command::Churn { members, ltv } => EstimateRequest::Churn(ChurnInputs::new(members, ltv)),
        Command::Retention { clients, revenue } => {
            EstimateRequest::Retention(RetentionInputs::new(clients, revenue))
        }
    };
    let request = if cli.no_clamp { request } else { request.clamped() };
    log::debug!("running {:?}", request);

    let outcome = runner.run(&request)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        let (volume, value) = request.volume_value();
        println!("Model: {} (volume {}, value {})", request.kind().as_str(), volume, value);
        for line in Summary::from_outcome(&outcome).lines() {
            println!("{}", line);
        }
    }

    if cli.track {
        if let Some(event) = TrackingEvent::for_outcome(&request, &outcome) {
            LogSink.track(&event);
        }
    }

    Ok(())
}
