//! Partner-program adjustment policy
//!
//! The partner program is modeled as a fixed policy, not user input: it
//! halves both downtime failure rates, discounts maintenance and
//! battery-replacement costs by 25%, and books a per-vehicle subscription
//! fee with the upfront capital.

use serde::{Deserialize, Serialize};

/// Default per-vehicle subscription fee booked at onboarding
pub const DEFAULT_SUBSCRIPTION_FEE: f64 = 12_000.0;

/// Scaling applied to a single scenario run of the projection engine
///
/// The baseline scenario uses the identity adjustment; the partner-adjusted
/// scenario uses the one produced by [`PartnerProgram::adjustment`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioAdjustment {
    /// Scales both failure-rate percentages (1.0 = as entered)
    pub failure_rate_multiplier: f64,

    /// Scales maintenance and battery-replacement cost components
    pub wear_cost_scale: f64,

    /// One-time per-vehicle fee added to upfront capital (Captive and DCO)
    pub upfront_fee_per_vehicle: f64,
}

impl ScenarioAdjustment {
    /// Identity adjustment: parameters exactly as entered
    pub fn baseline() -> Self {
        Self {
            failure_rate_multiplier: 1.0,
            wear_cost_scale: 1.0,
            upfront_fee_per_vehicle: 0.0,
        }
    }
}

/// The fixed partner-program policy
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PartnerProgram {
    /// Failure rates after adoption, as a share of baseline
    pub failure_rate_multiplier: f64,

    /// Maintenance and battery costs after adoption, as a share of baseline
    pub wear_cost_scale: f64,

    /// Per-vehicle subscription fee booked with the initial capital
    pub subscription_fee_per_vehicle: f64,
}

impl PartnerProgram {
    /// The adjustment the partner-adjusted scenario runs under
    pub fn adjustment(&self) -> ScenarioAdjustment {
        ScenarioAdjustment {
            failure_rate_multiplier: self.failure_rate_multiplier,
            wear_cost_scale: self.wear_cost_scale,
            upfront_fee_per_vehicle: self.subscription_fee_per_vehicle,
        }
    }
}

impl Default for PartnerProgram {
    fn default() -> Self {
        Self {
            failure_rate_multiplier: 0.5,
            wear_cost_scale: 0.75,
            subscription_fee_per_vehicle: DEFAULT_SUBSCRIPTION_FEE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_baseline_is_identity() {
        let baseline = ScenarioAdjustment::baseline();
        assert_eq!(baseline.failure_rate_multiplier, 1.0);
        assert_eq!(baseline.wear_cost_scale, 1.0);
        assert_eq!(baseline.upfront_fee_per_vehicle, 0.0);
    }

    #[test]
    fn test_default_program_ratios() {
        let adjustment = PartnerProgram::default().adjustment();
        assert_eq!(adjustment.failure_rate_multiplier, 0.5);
        assert_eq!(adjustment.wear_cost_scale, 0.75);
        assert_eq!(adjustment.upfront_fee_per_vehicle, DEFAULT_SUBSCRIPTION_FEE);
    }
}
