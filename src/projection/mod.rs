//! Projection engine for fleet scenario economics

mod engine;
mod metrics;
mod series;

pub use engine::{ProjectionConfig, ProjectionEngine, RevenueBasis, DEFAULT_REFERENCE_HOURS};
pub use metrics::{fleet_utilization, payback_period, roi_pct};
pub use series::{ProjectionResult, YearPoint};
