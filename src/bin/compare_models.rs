//! Compare the three fleet operating models on a common parameter set
//!
//! Usage: cargo run --bin compare_models

use fleet_projection::fleet::{
    ClassParameters, DcoParameters, FleetModel, FleetParameters, VehicleClass,
};
use fleet_projection::ScenarioComparator;

fn main() {
    env_logger::init();

    let params = shared_params();
    let comparator = ScenarioComparator::new();

    println!("Comparing fleet operating models over {} years", params.operational_years);
    println!("Fleet: {} vehicles", params.total_vehicles());

    for model in [FleetModel::Captive, FleetModel::Contracted, FleetModel::Dco] {
        println!("\n{}", "=".repeat(60));
        println!("{}", model.as_str());
        println!("{}", "=".repeat(60));

        let evaluation = comparator
            .evaluate(model, &params)
            .expect("Failed to evaluate scenario");

        println!(
            "  Initial cost:   baseline {:>12.0}   adjusted {:>12.0}",
            evaluation.baseline.initial_cost, evaluation.adjusted.initial_cost
        );
        println!(
            "  Annual profit:  baseline {:>12.0}   adjusted {:>12.0}",
            evaluation.baseline.annual_profit(),
            evaluation.adjusted.annual_profit()
        );
        println!(
            "  ROI:            baseline {:>11.2}%   adjusted {:>11.2}%",
            evaluation.baseline.roi_pct, evaluation.adjusted.roi_pct
        );
        println!(
            "  Payback:        baseline {:>12}   adjusted {:>12}",
            format_payback(evaluation.baseline.payback_years),
            format_payback(evaluation.adjusted.payback_years),
        );
        println!(
            "  Cost savings with partner program: {:>12.0}",
            evaluation.comparison.cost_savings
        );
    }
}

fn format_payback(payback: Option<f64>) -> String {
    match payback {
        Some(years) => format!("{:.2} yrs", years),
        None => "unreachable".to_string(),
    }
}

fn shared_params() -> FleetParameters {
    FleetParameters {
        classes: vec![
            ClassParameters {
                class: VehicleClass::TwoWheeler,
                vehicle_count: 3,
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
                vehicle_count: 3,
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
