//! Projection output structures

use serde::{Deserialize, Serialize};

use crate::fleet::FleetModel;

/// A single year of projection output
///
/// Year 0 is the pre-operation outlay: no revenue, cost equal to the initial
/// capital, cumulative profit equal to its negation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearPoint {
    pub year: u32,
    pub revenue: f64,
    pub cost: f64,
    pub cumulative_profit: f64,
}

/// Complete projection output for one scenario
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Operating model the projection ran under
    pub model: FleetModel,

    /// Per-year series, `operational_years + 1` entries, year 0 first
    pub series: Vec<YearPoint>,

    /// Steady-state annual revenue
    pub annual_revenue: f64,

    /// Steady-state annual recurring cost
    pub annual_cost: f64,

    /// Upfront capital booked at year 0
    pub initial_cost: f64,

    /// Initial capital plus every operating year's recurring cost
    pub total_cost: f64,

    /// Final cumulative profit over total cost, as a percentage
    pub roi_pct: f64,

    /// Fractional year cumulative profit first turns positive, if it does
    pub payback_years: Option<f64>,

    /// Realized share of the reference operating hours, in [0, 1]
    pub utilization: f64,
}

impl ProjectionResult {
    /// Cumulative profit at the end of the horizon
    pub fn final_cumulative_profit(&self) -> f64 {
        self.series.last().map(|p| p.cumulative_profit).unwrap_or(0.0)
    }

    /// Number of operating years covered by the series
    pub fn horizon_years(&self) -> u32 {
        self.series.len().saturating_sub(1) as u32
    }

    /// Annual profit in the steady state
    pub fn annual_profit(&self) -> f64 {
        self.annual_revenue - self.annual_cost
    }
}
