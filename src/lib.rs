//! Fleet Projection System - financial projections for electric delivery fleets
//!
//! This library provides:
//! - Multi-year cost/revenue projections across three fleet operating models
//!   (Captive, Contracted, DCO)
//! - Baseline vs partner-program scenario comparison
//! - ROI, payback-period, and fleet-utilization metrics
//! - Scenario loading from JSON files and CSV class tables

pub mod fleet;
pub mod partner;
pub mod projection;
pub mod scenario;

// Re-export commonly used types
pub use fleet::{FleetModel, FleetParameters, ParameterError};
pub use partner::{PartnerProgram, ScenarioAdjustment};
pub use projection::{ProjectionConfig, ProjectionEngine, ProjectionResult};
pub use scenario::{ComparisonMetrics, Evaluation, ScenarioComparator};
