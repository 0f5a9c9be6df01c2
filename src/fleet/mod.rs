//! Fleet data model: operating models, parameter records, scenario loading

mod data;
pub mod loader;

pub use data::{
    ClassParameters, DcoParameters, FleetModel, FleetParameters, ParameterError, VehicleClass,
    MAX_OPERATIONAL_YEARS,
};
pub use loader::{load_class_table, load_scenario, Scenario};
