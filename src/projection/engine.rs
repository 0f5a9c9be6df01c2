//! Core projection engine for annual fleet economics
//!
//! One parameterized engine covers all three operating models; the
//! model-specific cost and capital terms are selected by the `FleetModel`
//! tag rather than duplicated per model.

use serde::{Deserialize, Serialize};

use crate::fleet::{FleetModel, FleetParameters, ParameterError};
use crate::partner::ScenarioAdjustment;

use super::metrics;
use super::series::{ProjectionResult, YearPoint};

/// Reference annual operating hours: 8 hours over 300 working days
pub const DEFAULT_REFERENCE_HOURS: f64 = 8.0 * 300.0;

/// Months of contract payments booked upfront for the Contracted model
const CONTRACT_MONTHS_BOOKED_UPFRONT: f64 = 12.0;

/// Revenue-unit convention for a deployment
///
/// Pick one per deployment and keep it consistent; `revenue_per_unit` is
/// interpreted against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevenueBasis {
    /// Revenue is earned per completed delivery
    PerDelivery,
    /// Revenue is earned per kilometre driven
    PerDistance,
}

/// Configuration for a projection run
#[derive(Debug, Clone)]
pub struct ProjectionConfig {
    /// Revenue-unit convention in use
    pub revenue_basis: RevenueBasis,

    /// Fixed annual baseline the utilization metric divides by
    pub utilization_reference_hours: f64,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            revenue_basis: RevenueBasis::PerDelivery,
            utilization_reference_hours: DEFAULT_REFERENCE_HOURS,
        }
    }
}

/// Main projection engine
#[derive(Debug, Clone)]
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

impl ProjectionEngine {
    /// Create a new projection engine with the given config
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Annual revenue under one scenario adjustment
    ///
    /// Gross revenue is daily output times working days times the revenue
    /// unit, shrunk by the output fraction lost to downtime. Under the DCO
    /// model the operator retains only the management-fee share; the
    /// remainder is the driver's and is not tracked further.
    pub fn annual_revenue(
        &self,
        model: FleetModel,
        params: &FleetParameters,
        adjustment: &ScenarioAdjustment,
    ) -> f64 {
        let missed = params.missed_fraction(adjustment.failure_rate_multiplier);

        let daily_output: f64 = params
            .classes
            .iter()
            .map(|class| {
                let per_vehicle = match self.config.revenue_basis {
                    RevenueBasis::PerDelivery => {
                        class.deliveries_per_hour * params.work_hours_per_day
                    }
                    RevenueBasis::PerDistance => class.daily_distance_km,
                };
                per_vehicle * class.vehicle_count as f64
            })
            .sum();

        let gross =
            daily_output * params.work_days_per_year * params.revenue_per_unit * (1.0 - missed);

        match model {
            FleetModel::Dco => gross * params.dco.management_fee_pct / 100.0,
            FleetModel::Captive | FleetModel::Contracted => gross,
        }
    }

    /// Annual recurring cost under one scenario adjustment
    ///
    /// Sums independent rate-times-quantity components. Downtime is charged
    /// as the fraction of `revenue_for_downtime` it displaces. The
    /// `amortized_capital` term only applies to Captive steady-state views;
    /// the horizon projection books capital at year 0 and passes 0 here.
    /// Contract fees are capitalized upfront, so Contracted adds no fixed
    /// term; DCO adds the recurring platform cost.
    pub fn annual_cost(
        &self,
        model: FleetModel,
        params: &FleetParameters,
        adjustment: &ScenarioAdjustment,
        revenue_for_downtime: f64,
        amortized_capital: f64,
    ) -> f64 {
        let missed = params.missed_fraction(adjustment.failure_rate_multiplier);

        let mut electricity = 0.0;
        let mut maintenance = 0.0;
        let mut battery = 0.0;
        let mut wages = 0.0;
        let mut insurance = 0.0;

        for class in &params.classes {
            let count = class.vehicle_count as f64;
            electricity += class.daily_distance_km * count;
            maintenance += class.annual_maintenance * count;
            battery += class.annual_battery_replacement * count;
            wages += class.hourly_wage * count;
            insurance += class.insurance_premium * count;
        }

        electricity *= params.electricity_cost_per_km * params.work_days_per_year;
        maintenance *= adjustment.wear_cost_scale;
        battery *= adjustment.wear_cost_scale;
        wages *= params.work_hours_per_day * params.work_days_per_year;

        let downtime = missed * revenue_for_downtime;

        let fixed = match model {
            FleetModel::Captive => amortized_capital,
            FleetModel::Contracted => 0.0,
            FleetModel::Dco => params.dco.platform_operational_cost,
        };

        electricity + maintenance + battery + wages + insurance + downtime + fixed
    }

    /// Upfront capital booked at year 0
    ///
    /// Captive buys the fleet net of subsidies (floored at zero per unit);
    /// Contracted books the committed first-year block of contract payments;
    /// DCO pays one-time driver training and vehicle inspection. The partner
    /// subscription fee is added per vehicle for Captive and DCO, while
    /// Contracted capital comes from the same formula unchanged.
    pub fn initial_cost(
        &self,
        model: FleetModel,
        params: &FleetParameters,
        adjustment: &ScenarioAdjustment,
    ) -> f64 {
        let base: f64 = match model {
            FleetModel::Captive => params
                .classes
                .iter()
                .map(|c| c.net_acquisition_price() * c.vehicle_count as f64)
                .sum(),
            FleetModel::Contracted => params
                .classes
                .iter()
                .map(|c| {
                    c.monthly_contract_cost * CONTRACT_MONTHS_BOOKED_UPFRONT * c.vehicle_count as f64
                })
                .sum(),
            FleetModel::Dco => {
                (params.dco.training_cost_per_driver + params.dco.inspection_cost_per_vehicle)
                    * params.total_vehicles() as f64
            }
        };

        match model {
            FleetModel::Captive | FleetModel::Dco => {
                base + adjustment.upfront_fee_per_vehicle * params.total_vehicles() as f64
            }
            FleetModel::Contracted => base,
        }
    }

    /// Run the full projection for one scenario
    ///
    /// Validates the parameter record, then builds the year series as a
    /// running-sum recurrence: year 0 carries the initial outlay, every
    /// operating year adds the constant annual profit. Derived metrics come
    /// from the finished series.
    pub fn project(
        &self,
        model: FleetModel,
        params: &FleetParameters,
        adjustment: &ScenarioAdjustment,
    ) -> Result<ProjectionResult, ParameterError> {
        params.validate()?;

        let initial_cost = self.initial_cost(model, params, adjustment);
        let annual_revenue = self.annual_revenue(model, params, adjustment);
        let annual_cost = self.annual_cost(model, params, adjustment, annual_revenue, 0.0);

        let years = params.operational_years;
        let mut series = Vec::with_capacity(years as usize + 1);
        series.push(YearPoint {
            year: 0,
            revenue: 0.0,
            cost: initial_cost,
            cumulative_profit: -initial_cost,
        });

        let mut cumulative_profit = -initial_cost;
        for year in 1..=years {
            cumulative_profit += annual_revenue - annual_cost;
            series.push(YearPoint {
                year,
                revenue: annual_revenue,
                cost: annual_cost,
                cumulative_profit,
            });
        }

        let total_cost = initial_cost + annual_cost * years as f64;
        let roi_pct = metrics::roi_pct(cumulative_profit, total_cost);
        let payback_years = metrics::payback_period(&series);
        let utilization = metrics::fleet_utilization(
            params,
            adjustment.failure_rate_multiplier,
            self.config.utilization_reference_hours,
        );

        Ok(ProjectionResult {
            model,
            series,
            annual_revenue,
            annual_cost,
            initial_cost,
            total_cost,
            roi_pct,
            payback_years,
            utilization,
        })
    }
}
