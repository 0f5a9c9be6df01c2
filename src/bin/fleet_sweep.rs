//! Sweep fleet sizes to support sizing decisions
//!
//! Evaluates the same operating profile at increasing per-class vehicle
//! counts and reports ROI, payback, and partner-program savings per size.
//! Supports JSON output for API integration via --json flag.
//! Accepts config via environment variables:
//!   SWEEP_MAX_VEHICLES, FLEET_MODEL (captive|contracted|dco)

use fleet_projection::fleet::{
    ClassParameters, DcoParameters, FleetModel, FleetParameters, VehicleClass,
};
use fleet_projection::ScenarioComparator;
use rayon::prelude::*;
use serde::Serialize;
use std::env;
use std::time::Instant;

#[derive(Debug, Clone, Serialize)]
struct SweepRow {
    vehicles_per_class: u32,
    total_vehicles: u32,
    initial_cost: f64,
    roi_pct: f64,
    adjusted_roi_pct: f64,
    payback_years: Option<f64>,
    adjusted_payback_years: Option<f64>,
    cost_savings: f64,
}

#[derive(Serialize)]
struct SweepResponse {
    model: String,
    max_vehicles_per_class: u32,
    rows: Vec<SweepRow>,
    execution_time_ms: u64,
}

fn main() {
    env_logger::init();

    let json_output = env::args().any(|arg| arg == "--json");
    let max_vehicles: u32 = env_or("SWEEP_MAX_VEHICLES", 25);
    let model = match env::var("FLEET_MODEL").as_deref() {
        Ok("contracted") => FleetModel::Contracted,
        Ok("dco") => FleetModel::Dco,
        _ => FleetModel::Captive,
    };

    let start = Instant::now();
    let comparator = ScenarioComparator::new();

    let rows: Vec<SweepRow> = (1..=max_vehicles)
        .into_par_iter()
        .map(|size| {
            let mut params = base_params();
            for class in &mut params.classes {
                class.vehicle_count = size;
            }

            let evaluation = comparator
                .evaluate(model, &params)
                .expect("Failed to evaluate sweep point");

            SweepRow {
                vehicles_per_class: size,
                total_vehicles: params.total_vehicles(),
                initial_cost: evaluation.baseline.initial_cost,
                roi_pct: evaluation.baseline.roi_pct,
                adjusted_roi_pct: evaluation.adjusted.roi_pct,
                payback_years: evaluation.baseline.payback_years,
                adjusted_payback_years: evaluation.adjusted.payback_years,
                cost_savings: evaluation.comparison.cost_savings,
            }
        })
        .collect();

    if json_output {
        let response = SweepResponse {
            model: model.as_str().to_string(),
            max_vehicles_per_class: max_vehicles,
            rows,
            execution_time_ms: start.elapsed().as_millis() as u64,
        };
        println!("{}", serde_json::to_string(&response).unwrap());
        return;
    }

    println!("Fleet size sweep: {} model, 1..={} vehicles per class", model.as_str(), max_vehicles);
    println!(
        "{:>6} {:>6} {:>14} {:>10} {:>10} {:>10} {:>10} {:>14}",
        "Size", "Total", "Initial", "ROI%", "AdjROI%", "Payback", "AdjPayb", "Savings"
    );
    println!("{}", "-".repeat(88));
    for row in &rows {
        println!(
            "{:>6} {:>6} {:>14.0} {:>10.2} {:>10.2} {:>10} {:>10} {:>14.0}",
            row.vehicles_per_class,
            row.total_vehicles,
            row.initial_cost,
            row.roi_pct,
            row.adjusted_roi_pct,
            format_payback(row.payback_years),
            format_payback(row.adjusted_payback_years),
            row.cost_savings,
        );
    }
    println!("\nSwept {} sizes in {:?}", rows.len(), start.elapsed());
}

fn format_payback(payback: Option<f64>) -> String {
    match payback {
        Some(years) => format!("{:.2}", years),
        None => "-".to_string(),
    }
}

fn env_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}

fn base_params() -> FleetParameters {
    FleetParameters {
        classes: vec![
            ClassParameters {
                class: VehicleClass::TwoWheeler,
                vehicle_count: 1,
                acquisition_price: 80_000.0,
                government_subsidy: 15_000.0,
                state_incentive: 5_000.0,
                monthly_contract_cost: 12_000.0,
                insurance_premium: 4_000.0,
                annual_maintenance: 14_000.0,
                annual_battery_replacement: 2_000.0,
                daily_distance_km: 65.0,
                deliveries_per_hour: 3.0,
                hourly_wage: 87.0,
            },
            ClassParameters {
                class: VehicleClass::ThreeWheeler,
                vehicle_count: 1,
                acquisition_price: 335_000.0,
                government_subsidy: 30_000.0,
                state_incentive: 10_000.0,
                monthly_contract_cost: 20_000.0,
                insurance_premium: 8_000.0,
                annual_maintenance: 14_000.0,
                annual_battery_replacement: 10_000.0,
                daily_distance_km: 90.0,
                deliveries_per_hour: 5.0,
                hourly_wage: 107.0,
            },
        ],
        dco: DcoParameters {
            management_fee_pct: 20.0,
            platform_operational_cost: 250_000.0,
            training_cost_per_driver: 3_000.0,
            inspection_cost_per_vehicle: 1_500.0,
        },
        electricity_cost_per_km: 2.58,
        revenue_per_unit: 50.0,
        work_hours_per_day: 8.0,
        work_days_per_year: 300.0,
        operational_years: 5,
        battery_failure_pct: 5.0,
        software_failure_pct: 6.0,
    }
}
