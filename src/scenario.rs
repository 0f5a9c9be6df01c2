//! Scenario comparator for baseline vs partner-adjusted projections
//!
//! Runs the projection engine twice per evaluation — once with parameters as
//! entered, once under the partner-program adjustment — and derives the
//! comparison metrics the pair supports. Both scenarios are always computed;
//! the primary selector is a display concern only.

use serde::{Deserialize, Serialize};

use crate::fleet::{FleetModel, FleetParameters, ParameterError};
use crate::partner::{PartnerProgram, ScenarioAdjustment};
use crate::projection::{ProjectionConfig, ProjectionEngine, ProjectionResult};

/// Which of the two computed scenarios a consumer displays first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrimaryScenario {
    Baseline,
    PartnerAdjusted,
}

/// Deltas between the baseline and partner-adjusted projections
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonMetrics {
    /// Baseline total cost minus adjusted total cost over the horizon
    pub cost_savings: f64,

    /// Adjusted minus baseline utilization fraction
    pub utilization_delta: f64,

    /// Adjusted minus baseline ROI, in percentage points
    pub roi_delta_pct: f64,

    /// Adjusted minus baseline payback; `None` when either scenario never
    /// pays back within the horizon (the pair is not comparable)
    pub payback_delta_years: Option<f64>,
}

impl ComparisonMetrics {
    /// Derive the deltas from a pair of finished projections
    pub fn between(baseline: &ProjectionResult, adjusted: &ProjectionResult) -> Self {
        let payback_delta_years = match (baseline.payback_years, adjusted.payback_years) {
            (Some(baseline_years), Some(adjusted_years)) => Some(adjusted_years - baseline_years),
            _ => None,
        };

        Self {
            cost_savings: baseline.total_cost - adjusted.total_cost,
            utilization_delta: adjusted.utilization - baseline.utilization,
            roi_delta_pct: adjusted.roi_pct - baseline.roi_pct,
            payback_delta_years,
        }
    }
}

/// Both scenario projections plus their comparison
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Evaluation {
    pub model: FleetModel,
    pub baseline: ProjectionResult,
    pub adjusted: ProjectionResult,
    pub comparison: ComparisonMetrics,
    pub primary: PrimaryScenario,
}

impl Evaluation {
    /// The projection selected for display
    pub fn primary_result(&self) -> &ProjectionResult {
        match self.primary {
            PrimaryScenario::Baseline => &self.baseline,
            PrimaryScenario::PartnerAdjusted => &self.adjusted,
        }
    }

    /// Switch the display selector without recomputing anything
    pub fn with_primary(mut self, primary: PrimaryScenario) -> Self {
        self.primary = primary;
        self
    }
}

/// Evaluates a fleet scenario under both cost bases
#[derive(Debug, Clone)]
pub struct ScenarioComparator {
    engine: ProjectionEngine,
    program: PartnerProgram,
}

impl ScenarioComparator {
    /// Create a comparator with the default engine config and partner policy
    pub fn new() -> Self {
        Self::with_config(ProjectionConfig::default(), PartnerProgram::default())
    }

    /// Create a comparator with a specific engine config and partner policy
    pub fn with_config(config: ProjectionConfig, program: PartnerProgram) -> Self {
        Self {
            engine: ProjectionEngine::new(config),
            program,
        }
    }

    pub fn engine(&self) -> &ProjectionEngine {
        &self.engine
    }

    pub fn program(&self) -> &PartnerProgram {
        &self.program
    }

    /// Run both scenarios for one fleet and derive the comparison metrics
    ///
    /// Parameter invariants are checked up front; an invalid record is
    /// rejected before either projection runs.
    pub fn evaluate(
        &self,
        model: FleetModel,
        params: &FleetParameters,
    ) -> Result<Evaluation, ParameterError> {
        let baseline = self.engine.project(model, params, &ScenarioAdjustment::baseline())?;
        let adjusted = self.engine.project(model, params, &self.program.adjustment())?;
        let comparison = ComparisonMetrics::between(&baseline, &adjusted);

        log::debug!(
            "evaluated {} fleet: cost savings {:.0}, ROI delta {:.2}pp",
            model.as_str(),
            comparison.cost_savings,
            comparison.roi_delta_pct
        );

        Ok(Evaluation {
            model,
            baseline,
            adjusted,
            comparison,
            primary: PrimaryScenario::Baseline,
        })
    }
}

impl Default for ScenarioComparator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fleet::{ClassParameters, DcoParameters, VehicleClass};
    use approx::assert_relative_eq;

    fn test_params() -> FleetParameters {
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

    #[test]
    fn test_evaluate_is_idempotent() {
        let comparator = ScenarioComparator::new();
        let params = test_params();

        let first = comparator.evaluate(FleetModel::Captive, &params).unwrap();
        let second = comparator.evaluate(FleetModel::Captive, &params).unwrap();

        let first_json = serde_json::to_string(&first).unwrap();
        let second_json = serde_json::to_string(&second).unwrap();
        assert_eq!(first_json, second_json);
    }

    #[test]
    fn test_partner_ratios_hold_exactly() {
        let comparator = ScenarioComparator::new();
        let params = test_params();
        let evaluation = comparator.evaluate(FleetModel::Captive, &params).unwrap();

        // Halved failure rates: the adjusted missed fraction is exactly half
        let baseline_missed = params.missed_fraction(1.0);
        let adjusted_missed = params.missed_fraction(0.5);
        assert_relative_eq!(adjusted_missed * 2.0, baseline_missed);

        // Downtime-free cost components differ only by the wear discount and
        // downtime charge; isolate the wear part with zero downtime revenue
        let engine = comparator.engine();
        let baseline_wear = engine.annual_cost(
            FleetModel::Captive,
            &params,
            &ScenarioAdjustment::baseline(),
            0.0,
            0.0,
        );
        let adjusted_wear = engine.annual_cost(
            FleetModel::Captive,
            &params,
            &comparator.program().adjustment(),
            0.0,
            0.0,
        );
        let maintenance_and_battery: f64 = params
            .classes
            .iter()
            .map(|c| (c.annual_maintenance + c.annual_battery_replacement) * c.vehicle_count as f64)
            .sum();
        assert_relative_eq!(
            baseline_wear - adjusted_wear,
            0.25 * maintenance_and_battery,
            max_relative = 1e-12
        );

        // The utilization gain follows directly from the halved downtime
        assert!(evaluation.comparison.utilization_delta > 0.0);
    }

    #[test]
    fn test_adjusted_capital_includes_subscription_fee() {
        let comparator = ScenarioComparator::new();
        let params = test_params();
        let evaluation = comparator.evaluate(FleetModel::Captive, &params).unwrap();

        let fee = comparator.program().subscription_fee_per_vehicle;
        let expected = evaluation.baseline.initial_cost + fee * params.total_vehicles() as f64;
        assert_relative_eq!(evaluation.adjusted.initial_cost, expected);
    }

    #[test]
    fn test_contracted_capital_unchanged_by_partner_program() {
        let comparator = ScenarioComparator::new();
        let evaluation = comparator
            .evaluate(FleetModel::Contracted, &test_params())
            .unwrap();
        assert_relative_eq!(
            evaluation.adjusted.initial_cost,
            evaluation.baseline.initial_cost
        );
    }

    #[test]
    fn test_payback_delta_not_comparable_when_unreachable() {
        let comparator = ScenarioComparator::new();
        let mut params = test_params();
        params.revenue_per_unit = 0.0;

        let evaluation = comparator.evaluate(FleetModel::Captive, &params).unwrap();
        assert_eq!(evaluation.baseline.payback_years, None);
        assert_eq!(evaluation.comparison.payback_delta_years, None);
    }

    #[test]
    fn test_primary_selector_does_not_recompute() {
        let comparator = ScenarioComparator::new();
        let evaluation = comparator.evaluate(FleetModel::Dco, &test_params()).unwrap();

        let baseline_roi = evaluation.baseline.roi_pct;
        let switched = evaluation.with_primary(PrimaryScenario::PartnerAdjusted);
        assert_eq!(switched.primary, PrimaryScenario::PartnerAdjusted);
        assert_eq!(switched.baseline.roi_pct, baseline_roi);
        assert_eq!(
            switched.primary_result().roi_pct,
            switched.adjusted.roi_pct
        );
    }

    #[test]
    fn test_invalid_parameters_rejected() {
        let comparator = ScenarioComparator::new();
        let mut params = test_params();
        params.software_failure_pct = 150.0;

        assert!(comparator.evaluate(FleetModel::Captive, &params).is_err());
    }
}
