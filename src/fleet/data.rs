//! Fleet data structures matching the scenario input format

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Longest projection horizon the engine accepts, in years
pub const MAX_OPERATIONAL_YEARS: u32 = 100;

/// Operating model for the fleet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FleetModel {
    /// Operator owns the vehicles outright
    Captive,
    /// Vehicles leased under a fixed monthly contract
    Contracted,
    /// Driver-owned vehicles under a revenue-share arrangement
    Dco,
}

impl FleetModel {
    /// Get the display name used in reports
    pub fn as_str(&self) -> &'static str {
        match self {
            FleetModel::Captive => "Captive",
            FleetModel::Contracted => "Contracted",
            FleetModel::Dco => "DCO",
        }
    }
}

/// Vehicle class within the fleet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VehicleClass {
    /// Two-wheeled delivery vehicle
    TwoWheeler,
    /// Three-wheeled delivery vehicle
    ThreeWheeler,
}

impl VehicleClass {
    /// Get the short label matching the scenario-file format
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleClass::TwoWheeler => "2W",
            VehicleClass::ThreeWheeler => "3W",
        }
    }
}

/// A parameter that violates its invariant
///
/// Rejected before any computation runs; nothing is clamped silently except
/// the two clamps the model itself defines (per-unit net acquisition price
/// floored at zero, missed-output fraction capped at one).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParameterError {
    /// A monetary, time, or count field is below zero
    #[error("{field} must be non-negative, got {value}")]
    Negative { field: String, value: f64 },

    /// A percentage field lies outside [0, 100]
    #[error("{field} must be within [0, 100], got {value}")]
    PercentageOutOfRange { field: String, value: f64 },

    /// The projection horizon is shorter than one year
    #[error("operational_years must be at least 1")]
    ZeroHorizon,

    /// The projection horizon exceeds the supported maximum
    #[error("operational_years must not exceed {max}, got {value}")]
    HorizonTooLong { value: u32, max: u32 },

    /// A field is not a finite number
    #[error("{field} must be a finite number")]
    NotFinite { field: String },
}

/// Per-class economics and operating inputs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassParameters {
    /// Vehicle class this record describes
    pub class: VehicleClass,

    /// Number of vehicles of this class in the fleet
    pub vehicle_count: u32,

    /// Purchase price per vehicle (Captive)
    pub acquisition_price: f64,

    /// Central-government purchase subsidy per vehicle
    pub government_subsidy: f64,

    /// State purchase incentive per vehicle
    pub state_incentive: f64,

    /// Monthly lease payment per vehicle (Contracted)
    pub monthly_contract_cost: f64,

    /// Annual insurance premium per vehicle
    pub insurance_premium: f64,

    /// Annual maintenance cost per vehicle
    pub annual_maintenance: f64,

    /// Annual battery-replacement cost per vehicle
    pub annual_battery_replacement: f64,

    /// Average distance driven per vehicle per day, in km
    pub daily_distance_km: f64,

    /// Deliveries completed per vehicle per hour
    pub deliveries_per_hour: f64,

    /// Hourly driver wage for this class
    pub hourly_wage: f64,
}

impl ClassParameters {
    /// Net purchase price per vehicle after subsidies, floored at zero
    ///
    /// Subsidies exceeding the sticker price never produce negative capital.
    pub fn net_acquisition_price(&self) -> f64 {
        (self.acquisition_price - self.government_subsidy - self.state_incentive).max(0.0)
    }
}

/// DCO-specific cost inputs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DcoParameters {
    /// Share of gross revenue the operator retains, 0-100
    pub management_fee_pct: f64,

    /// Annual cost of running the driver-partner platform
    pub platform_operational_cost: f64,

    /// One-time training cost per onboarded driver
    pub training_cost_per_driver: f64,

    /// One-time inspection cost per onboarded vehicle
    pub inspection_cost_per_vehicle: f64,
}

/// Complete parameter record for one fleet scenario
///
/// Every field is required; a missing value is a configuration error in the
/// input layer, never defaulted here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FleetParameters {
    /// Per-class economics, one entry per vehicle class in the fleet
    pub classes: Vec<ClassParameters>,

    /// DCO-specific inputs (ignored by the other models)
    pub dco: DcoParameters,

    /// Electricity cost per km driven
    pub electricity_cost_per_km: f64,

    /// Revenue earned per output unit (delivery or km, per deployment)
    pub revenue_per_unit: f64,

    /// Working hours per day
    pub work_hours_per_day: f64,

    /// Working days per year
    pub work_days_per_year: f64,

    /// Projection horizon in years
    pub operational_years: u32,

    /// Share of potential output lost to battery downtime, 0-100
    pub battery_failure_pct: f64,

    /// Share of potential output lost to software downtime, 0-100
    pub software_failure_pct: f64,
}

impl FleetParameters {
    /// Total vehicles across all classes
    pub fn total_vehicles(&self) -> u32 {
        self.classes.iter().map(|c| c.vehicle_count).sum()
    }

    /// Fraction of potential output lost to downtime, capped at 1
    ///
    /// The multiplier scales both failure rates together (1.0 for baseline,
    /// 0.5 under the partner program).
    pub fn missed_fraction(&self, failure_rate_multiplier: f64) -> f64 {
        let combined = (self.battery_failure_pct + self.software_failure_pct)
            * failure_rate_multiplier
            / 100.0;
        combined.clamp(0.0, 1.0)
    }

    /// Check every invariant, rejecting the record before computation
    pub fn validate(&self) -> Result<(), ParameterError> {
        for class in &self.classes {
            let label = class.class.as_str();
            non_negative(&format!("{label} acquisition_price"), class.acquisition_price)?;
            non_negative(&format!("{label} government_subsidy"), class.government_subsidy)?;
            non_negative(&format!("{label} state_incentive"), class.state_incentive)?;
            non_negative(&format!("{label} monthly_contract_cost"), class.monthly_contract_cost)?;
            non_negative(&format!("{label} insurance_premium"), class.insurance_premium)?;
            non_negative(&format!("{label} annual_maintenance"), class.annual_maintenance)?;
            non_negative(
                &format!("{label} annual_battery_replacement"),
                class.annual_battery_replacement,
            )?;
            non_negative(&format!("{label} daily_distance_km"), class.daily_distance_km)?;
            non_negative(&format!("{label} deliveries_per_hour"), class.deliveries_per_hour)?;
            non_negative(&format!("{label} hourly_wage"), class.hourly_wage)?;
        }

        percentage("dco management_fee_pct", self.dco.management_fee_pct)?;
        non_negative("dco platform_operational_cost", self.dco.platform_operational_cost)?;
        non_negative("dco training_cost_per_driver", self.dco.training_cost_per_driver)?;
        non_negative("dco inspection_cost_per_vehicle", self.dco.inspection_cost_per_vehicle)?;

        non_negative("electricity_cost_per_km", self.electricity_cost_per_km)?;
        non_negative("revenue_per_unit", self.revenue_per_unit)?;
        non_negative("work_hours_per_day", self.work_hours_per_day)?;
        non_negative("work_days_per_year", self.work_days_per_year)?;
        percentage("battery_failure_pct", self.battery_failure_pct)?;
        percentage("software_failure_pct", self.software_failure_pct)?;

        if self.operational_years < 1 {
            return Err(ParameterError::ZeroHorizon);
        }
        if self.operational_years > MAX_OPERATIONAL_YEARS {
            return Err(ParameterError::HorizonTooLong {
                value: self.operational_years,
                max: MAX_OPERATIONAL_YEARS,
            });
        }

        Ok(())
    }
}

fn non_negative(field: &str, value: f64) -> Result<(), ParameterError> {
    if !value.is_finite() {
        return Err(ParameterError::NotFinite { field: field.to_string() });
    }
    if value < 0.0 {
        return Err(ParameterError::Negative { field: field.to_string(), value });
    }
    Ok(())
}

fn percentage(field: &str, value: f64) -> Result<(), ParameterError> {
    non_negative(field, value)?;
    if value > 100.0 {
        return Err(ParameterError::PercentageOutOfRange { field: field.to_string(), value });
    }
    Ok(())
}
