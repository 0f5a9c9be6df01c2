//! Derived metrics over a projection series
//!
//! Payback period, return on investment, and fleet utilization. All pure
//! functions; division guards return a defined value instead of faulting.

use crate::fleet::FleetParameters;

use super::series::YearPoint;

/// Find the payback period of a cumulative-profit series, in fractional years
///
/// Scans consecutive year pairs for the first transition from non-positive to
/// strictly positive cumulative profit and interpolates linearly within that
/// year. A series that oscillates around zero reports the first crossing.
/// Returns `None` when cumulative profit never turns positive in the horizon.
pub fn payback_period(series: &[YearPoint]) -> Option<f64> {
    series.windows(2).find_map(|pair| {
        let (prev, next) = (&pair[0], &pair[1]);
        if prev.cumulative_profit <= 0.0 && next.cumulative_profit > 0.0 {
            let step = next.cumulative_profit - prev.cumulative_profit;
            Some((next.year as f64 - 1.0) - prev.cumulative_profit / step)
        } else {
            None
        }
    })
}

/// Return on investment as a percentage of total cost
///
/// Returns 0 when the divisor is 0 so an empty fleet never faults.
pub fn roi_pct(final_cumulative_profit: f64, total_cost: f64) -> f64 {
    if total_cost > 0.0 {
        final_cumulative_profit / total_cost * 100.0
    } else {
        0.0
    }
}

/// Share of the reference operating hours actually realized after downtime
///
/// `reference_hours` is the deployment's fixed annual baseline (hours per day
/// times days per year); the result is clamped to [0, 1] even when failure
/// rates sum past 100.
pub fn fleet_utilization(
    params: &FleetParameters,
    failure_rate_multiplier: f64,
    reference_hours: f64,
) -> f64 {
    if reference_hours <= 0.0 {
        return 0.0;
    }

    let lost = params.missed_fraction(failure_rate_multiplier);
    let realized = params.work_hours_per_day * params.work_days_per_year * (1.0 - lost);

    (realized / reference_hours).clamp(0.0, 1.0)
}
