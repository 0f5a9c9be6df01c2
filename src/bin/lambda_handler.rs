//! AWS Lambda handler for fleet scenario evaluation
//!
//! Accepts an evaluation request as JSON and returns both scenario
//! projections plus the comparison metrics.

use fleet_projection::fleet::{FleetModel, FleetParameters};
use fleet_projection::partner::PartnerProgram;
use fleet_projection::projection::{ProjectionConfig, RevenueBasis, DEFAULT_REFERENCE_HOURS};
use fleet_projection::{Evaluation, ScenarioComparator};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde::{Deserialize, Serialize};
use std::time::Instant;

fn default_revenue_basis() -> RevenueBasis {
    RevenueBasis::PerDelivery
}

fn default_reference_hours() -> f64 {
    DEFAULT_REFERENCE_HOURS
}

/// Input configuration for one evaluation
#[derive(Debug, Deserialize)]
struct EvaluationRequest {
    /// Fleet operating model
    model: FleetModel,

    /// Fully-populated parameter record
    parameters: FleetParameters,

    /// Revenue-unit convention (default: per delivery)
    #[serde(default = "default_revenue_basis")]
    revenue_basis: RevenueBasis,

    /// Utilization baseline in annual hours (default: 8 x 300)
    #[serde(default = "default_reference_hours")]
    utilization_reference_hours: f64,

    /// Partner policy override (default: the standard program)
    #[serde(default)]
    partner_program: Option<PartnerProgram>,
}

#[derive(Debug, Serialize)]
struct EvaluationResponse {
    evaluation: Evaluation,
    execution_time_ms: u64,
}

async fn handle(event: LambdaEvent<EvaluationRequest>) -> Result<EvaluationResponse, Error> {
    let start = Instant::now();
    let request = event.payload;

    let config = ProjectionConfig {
        revenue_basis: request.revenue_basis,
        utilization_reference_hours: request.utilization_reference_hours,
    };
    let program = request.partner_program.unwrap_or_default();

    let comparator = ScenarioComparator::with_config(config, program);
    let evaluation = comparator.evaluate(request.model, &request.parameters)?;

    log::info!(
        "evaluated {} fleet with {} vehicles in {:?}",
        request.model.as_str(),
        request.parameters.total_vehicles(),
        start.elapsed()
    );

    Ok(EvaluationResponse {
        evaluation,
        execution_time_ms: start.elapsed().as_millis() as u64,
    })
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handle)).await
}
