//! Fleet Projection CLI
//!
//! Command-line interface for running fleet projections and baseline vs
//! partner-program comparisons

use anyhow::anyhow;
use clap::{Parser, ValueEnum};
use fleet_projection::fleet::{
    self, ClassParameters, DcoParameters, FleetModel, FleetParameters, VehicleClass,
};
use fleet_projection::scenario::PrimaryScenario;
use fleet_projection::{Evaluation, ScenarioAdjustment, ScenarioComparator};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

/// Fleet operating model choices on the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModelArg {
    Captive,
    Contracted,
    Dco,
}

impl From<ModelArg> for FleetModel {
    fn from(arg: ModelArg) -> Self {
        match arg {
            ModelArg::Captive => FleetModel::Captive,
            ModelArg::Contracted => FleetModel::Contracted,
            ModelArg::Dco => FleetModel::Dco,
        }
    }
}

#[derive(Parser)]
#[command(
    name = "fleet_projection",
    about = "Financial projections for electric delivery fleets"
)]
struct Cli {
    /// Fleet operating model to project
    #[arg(long, value_enum, default_value_t = ModelArg::Captive)]
    model: ModelArg,

    /// JSON scenario file; its model selection overrides --model
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// CSV class table replacing the scenario's per-class parameters
    #[arg(long)]
    classes: Option<PathBuf>,

    /// Override the projection horizon in years
    #[arg(long)]
    years: Option<u32>,

    /// Write the yearly series of both scenarios to this CSV file
    #[arg(long)]
    report: Option<PathBuf>,

    /// Show the partner-adjusted scenario as primary
    #[arg(long)]
    partner_primary: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    println!("Fleet Projection System v0.1.0");
    println!("==============================\n");

    let (model, mut params) = match &cli.scenario {
        Some(path) => {
            let scenario = fleet::load_scenario(path)
                .map_err(|e| anyhow!("failed to load scenario {}: {e}", path.display()))?;
            (scenario.model, scenario.parameters)
        }
        None => (cli.model.into(), demo_parameters()),
    };

    if let Some(path) = &cli.classes {
        params.classes = fleet::load_class_table(path)
            .map_err(|e| anyhow!("failed to load class table {}: {e}", path.display()))?;
    }
    if let Some(years) = cli.years {
        params.operational_years = years;
    }

    let comparator = ScenarioComparator::new();
    let mut evaluation = comparator.evaluate(model, &params)?;
    if cli.partner_primary {
        evaluation = evaluation.with_primary(PrimaryScenario::PartnerAdjusted);
    }

    print_evaluation(&evaluation);

    // Steady-state annual view with capital amortized over the horizon.
    // Informational only; the projection itself books capital at year 0.
    if model == FleetModel::Captive {
        let amortized = evaluation.baseline.initial_cost / params.operational_years as f64;
        let steady_state = comparator.engine().annual_cost(
            model,
            &params,
            &ScenarioAdjustment::baseline(),
            evaluation.baseline.annual_revenue,
            amortized,
        );
        println!("\nSteady-state annual cost incl. amortized capital: {:>12.0}", steady_state);
    }

    if let Some(path) = &cli.report {
        write_report(path, &evaluation)?;
        println!("\nFull series written to: {}", path.display());
        println!("Generated at: {}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S"));
    }

    Ok(())
}

fn print_evaluation(evaluation: &Evaluation) {
    println!("Model: {}", evaluation.model.as_str());
    println!();

    println!(
        "{:>24} {:>16} {:>16}",
        "", "Baseline", "Partner-adjusted"
    );
    let rows = [
        ("Initial cost", evaluation.baseline.initial_cost, evaluation.adjusted.initial_cost),
        ("Annual revenue", evaluation.baseline.annual_revenue, evaluation.adjusted.annual_revenue),
        ("Annual cost", evaluation.baseline.annual_cost, evaluation.adjusted.annual_cost),
        ("Total cost", evaluation.baseline.total_cost, evaluation.adjusted.total_cost),
    ];
    for (label, baseline, adjusted) in rows {
        println!("{:>24} {:>16.0} {:>16.0}", label, baseline, adjusted);
    }
    println!(
        "{:>24} {:>15.2}% {:>15.2}%",
        "ROI", evaluation.baseline.roi_pct, evaluation.adjusted.roi_pct
    );
    println!(
        "{:>24} {:>16} {:>16}",
        "Payback (years)",
        format_payback(evaluation.baseline.payback_years),
        format_payback(evaluation.adjusted.payback_years),
    );
    println!(
        "{:>24} {:>15.1}% {:>15.1}%",
        "Utilization",
        evaluation.baseline.utilization * 100.0,
        evaluation.adjusted.utilization * 100.0
    );

    println!("\nPrimary scenario series ({:?}):", evaluation.primary);
    println!(
        "{:>5} {:>14} {:>14} {:>18}",
        "Year", "Revenue", "Cost", "Cumulative"
    );
    println!("{}", "-".repeat(54));
    for point in &evaluation.primary_result().series {
        println!(
            "{:>5} {:>14.0} {:>14.0} {:>18.0}",
            point.year, point.revenue, point.cost, point.cumulative_profit
        );
    }

    println!("\nComparison:");
    println!("  Cost savings over horizon: {:>14.0}", evaluation.comparison.cost_savings);
    println!("  Utilization delta:         {:>13.1}pp", evaluation.comparison.utilization_delta * 100.0);
    println!("  ROI delta:                 {:>13.2}pp", evaluation.comparison.roi_delta_pct);
    match evaluation.comparison.payback_delta_years {
        Some(delta) => println!("  Payback delta:             {:>13.2} years", delta),
        None => println!("  Payback delta:             not comparable"),
    }
}

fn format_payback(payback: Option<f64>) -> String {
    match payback {
        Some(years) => format!("{:.2}", years),
        None => "unreachable".to_string(),
    }
}

fn write_report(path: &PathBuf, evaluation: &Evaluation) -> anyhow::Result<()> {
    let mut file = File::create(path)?;

    writeln!(
        file,
        "Year,BaselineRevenue,BaselineCost,BaselineCumulativeProfit,\
         AdjustedRevenue,AdjustedCost,AdjustedCumulativeProfit"
    )?;

    for (baseline, adjusted) in evaluation
        .baseline
        .series
        .iter()
        .zip(evaluation.adjusted.series.iter())
    {
        writeln!(
            file,
            "{},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2}",
            baseline.year,
            baseline.revenue,
            baseline.cost,
            baseline.cumulative_profit,
            adjusted.revenue,
            adjusted.cost,
            adjusted.cumulative_profit,
        )?;
    }

    Ok(())
}

/// Built-in demo fleet used when no scenario file is given
fn demo_parameters() -> FleetParameters {
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
