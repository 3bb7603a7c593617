//! AWS Lambda handler for churn and retention estimates
//!
//! Accepts an estimate request as JSON through a Lambda Function URL and
//! returns the raw outcome together with display-ready strings.
//!
//! Request body: `{"model": "churn", "monthly_new_members": 50, "lifetime_value_per_member": 212}`
//! or `{"model": "retention", "new_clients_per_month": 100, "avg_revenue_per_client": 150}`.
//! Add `"clamp": false` to skip clamping inputs to the calculator ranges.
//!
//! Set ASSUMPTIONS_PATH to load benchmarks from a directory instead of the defaults.

use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;

use aws_lambda_events::event::lambda_function_urls::LambdaFunctionUrlRequest;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use churn_estimator::report::{Summary, TrackingEvent};
use churn_estimator::{Assumptions, EstimateOutcome, EstimateRequest, ScenarioRunner};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde::{Deserialize, Serialize};

/// Input for one estimate
#[derive(Debug, Deserialize)]
pub struct HandlerRequest {
    #[serde(flatten)]
    pub estimate: EstimateRequest,

    /// Clamp inputs to slider ranges (default: true)
    #[serde(default = "default_clamp")]
    pub clamp: bool,
}

fn default_clamp() -> bool { true }

/// Output for one estimate
#[derive(Debug, Serialize)]
pub struct HandlerResponse {
    /// Inputs after clamping
    pub inputs: EstimateRequest,
    pub outcome: EstimateOutcome,
    pub summary: Summary,
    pub tracking: Option<TrackingEvent>,
    pub assumptions: Assumptions,
}

/// Lambda Function URL response envelope
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct UrlResponse {
    status_code: u16,
    headers: HashMap<&'static str, &'static str>,
    body: String,
}

static RUNNER: OnceLock<ScenarioRunner> = OnceLock::new();

fn cors_headers() -> HashMap<&'static str, &'static str> {
    HashMap::from([
        ("Content-Type", "application/json"),
        ("Access-Control-Allow-Origin", "*"),
        ("Access-Control-Allow-Methods", "POST, OPTIONS"),
        ("Access-Control-Allow-Headers", "Content-Type"),
    ])
}

fn error_response(status: u16, message: &str) -> UrlResponse {
    UrlResponse {
        status_code: status,
        headers: cors_headers(),
        body: serde_json::json!({ "error": message }).to_string(),
    }
}

/// Evaluate one request body. Kept free of Lambda types so it can be tested directly.
fn handle_body(runner: &ScenarioRunner, body: &str) -> UrlResponse {
    let request: HandlerRequest = match serde_json::from_str(body) {
        Ok(r) => r,
        Err(e) => return error_response(400, &format!("Invalid JSON: {}", e)),
    };

    let estimate = if request.clamp {
        request.estimate.clamped()
    } else {
        request.estimate
    };

    let outcome = match runner.run(&estimate) {
        Ok(o) => o,
        Err(e) => return error_response(422, &e.to_string()),
    };

    let response = HandlerResponse {
        inputs: estimate,
        outcome,
        summary: Summary::from_outcome(&outcome),
        tracking: TrackingEvent::for_outcome(&estimate, &outcome),
        assumptions: *runner.assumptions(),
    };

    match serde_json::to_string(&response) {
        Ok(body) => UrlResponse {
            status_code: 200,
            headers: cors_headers(),
            body,
        },
        Err(e) => error_response(500, &format!("Failed to serialize response: {}", e)),
    }
}

/// Request body as text. Function URLs base64-encode bodies without a text content type.
fn decode_body(body: Option<String>, is_base64_encoded: bool) -> Result<String, String> {
    let body = body.unwrap_or_else(|| "{}".to_string());
    if !is_base64_encoded {
        return Ok(body);
    }

    let bytes = STANDARD
        .decode(body.trim())
        .map_err(|e| format!("Invalid base64 body: {}", e))?;
    String::from_utf8(bytes).map_err(|e| format!("Body is not UTF-8: {}", e))
}

fn load_runner() -> Result<ScenarioRunner, Error> {
    match std::env::var("ASSUMPTIONS_PATH") {
        Ok(dir) => Ok(ScenarioRunner::from_csv_path(Path::new(&dir))?),
        Err(_) => Ok(ScenarioRunner::new()),
    }
}

/// Lambda handler function
async fn handler(event: LambdaEvent<LambdaFunctionUrlRequest>) -> Result<UrlResponse, Error> {
    let request = event.payload;

    // Handle CORS preflight
    if request.request_context.http.method.as_deref() == Some("OPTIONS") {
        return Ok(UrlResponse {
            status_code: 200,
            headers: cors_headers(),
            body: String::new(),
        });
    }

    let runner = match RUNNER.get() {
        Some(r) => r,
        None => return Ok(error_response(500, "Estimator not initialised")),
    };

    let response = match decode_body(request.body, request.is_base64_encoded) {
        Ok(body) => handle_body(runner, &body),
        Err(message) => error_response(400, &message),
    };
    log::info!("estimate request answered with status {}", response.status_code);
    Ok(response)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();

    let runner = load_runner()?;
    log::debug!("benchmarks: {:?}", runner.assumptions());
    let _ = RUNNER.set(runner);

    run(service_fn(handler)).await
}
