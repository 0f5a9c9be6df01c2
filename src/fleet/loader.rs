//! Load fleet scenarios from scenario files
//!
//! A scenario file is JSON holding the operating model and a fully-populated
//! parameter record. The per-class table can also be maintained as CSV and
//! swapped into a scenario.

use super::{ClassParameters, FleetModel, FleetParameters, VehicleClass};
use csv::Reader;
use std::error::Error;
use std::fs::File;
use std::path::Path;

/// A stored scenario: operating model plus its parameter record
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Scenario {
    pub model: FleetModel,
    pub parameters: FleetParameters,
}

/// Load a scenario from a JSON file
pub fn load_scenario<P: AsRef<Path>>(path: P) -> Result<Scenario, Box<dyn Error>> {
    let file = File::open(path)?;
    load_scenario_from_reader(file)
}

/// Load a scenario from any reader (e.g., string buffer, network stream)
pub fn load_scenario_from_reader<R: std::io::Read>(reader: R) -> Result<Scenario, Box<dyn Error>> {
    let scenario: Scenario = serde_json::from_reader(reader)?;
    log::debug!(
        "loaded scenario: {} model, {} vehicle classes",
        scenario.model.as_str(),
        scenario.parameters.classes.len()
    );
    Ok(scenario)
}

/// Raw CSV row matching the class table columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "Class")]
    class: String,
    #[serde(rename = "VehicleCount")]
    vehicle_count: u32,
    #[serde(rename = "AcquisitionPrice")]
    acquisition_price: f64,
    #[serde(rename = "GovernmentSubsidy")]
    government_subsidy: f64,
    #[serde(rename = "StateIncentive")]
    state_incentive: f64,
    #[serde(rename = "MonthlyContractCost")]
    monthly_contract_cost: f64,
    #[serde(rename = "InsurancePremium")]
    insurance_premium: f64,
    #[serde(rename = "AnnualMaintenance")]
    annual_maintenance: f64,
    #[serde(rename = "AnnualBatteryReplacement")]
    annual_battery_replacement: f64,
    #[serde(rename = "DailyDistanceKm")]
    daily_distance_km: f64,
    #[serde(rename = "DeliveriesPerHour")]
    deliveries_per_hour: f64,
    #[serde(rename = "HourlyWage")]
    hourly_wage: f64,
}

impl CsvRow {
    fn to_class(self) -> Result<ClassParameters, Box<dyn Error>> {
        let class = match self.class.as_str() {
            "2W" => VehicleClass::TwoWheeler,
            "3W" => VehicleClass::ThreeWheeler,
            other => return Err(format!("Unknown Class: {}", other).into()),
        };

        Ok(ClassParameters {
            class,
            vehicle_count: self.vehicle_count,
            acquisition_price: self.acquisition_price,
            government_subsidy: self.government_subsidy,
            state_incentive: self.state_incentive,
            monthly_contract_cost: self.monthly_contract_cost,
            insurance_premium: self.insurance_premium,
            annual_maintenance: self.annual_maintenance,
            annual_battery_replacement: self.annual_battery_replacement,
            daily_distance_km: self.daily_distance_km,
            deliveries_per_hour: self.deliveries_per_hour,
            hourly_wage: self.hourly_wage,
        })
    }
}

/// Load the per-class parameter table from a CSV file
pub fn load_class_table<P: AsRef<Path>>(path: P) -> Result<Vec<ClassParameters>, Box<dyn Error>> {
    let mut reader = Reader::from_path(path)?;
    let mut classes = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        classes.push(row.to_class()?);
    }

    Ok(classes)
}

/// Load the per-class parameter table from any reader
pub fn load_class_table_from_reader<R: std::io::Read>(
    reader: R,
) -> Result<Vec<ClassParameters>, Box<dyn Error>> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut classes = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        classes.push(row.to_class()?);
    }

    Ok(classes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fleet::DcoParameters;

    const CLASS_TABLE: &str = "\
Class,VehicleCount,AcquisitionPrice,GovernmentSubsidy,StateIncentive,MonthlyContractCost,InsurancePremium,AnnualMaintenance,AnnualBatteryReplacement,DailyDistanceKm,DeliveriesPerHour,HourlyWage
2W,3,80000,15000,5000,12000,4000,14000,2000,65,3,87
3W,2,335000,30000,10000,20000,8000,14000,10000,90,5,107
";

    #[test]
    fn test_load_class_table() {
        let classes = load_class_table_from_reader(CLASS_TABLE.as_bytes())
            .expect("Failed to parse class table");
        assert_eq!(classes.len(), 2);

        let two_wheeler = &classes[0];
        assert_eq!(two_wheeler.class, VehicleClass::TwoWheeler);
        assert_eq!(two_wheeler.vehicle_count, 3);
        assert_eq!(two_wheeler.acquisition_price, 80_000.0);

        let three_wheeler = &classes[1];
        assert_eq!(three_wheeler.class, VehicleClass::ThreeWheeler);
        assert_eq!(three_wheeler.daily_distance_km, 90.0);
    }

    #[test]
    fn test_unknown_class_rejected() {
        let table = CLASS_TABLE.replace("3W,", "4W,");
        let result = load_class_table_from_reader(table.as_bytes());
        assert!(result.is_err());
    }

    #[test]
    fn test_scenario_round_trips_through_json() {
        let scenario = Scenario {
            model: FleetModel::Contracted,
            parameters: FleetParameters {
                classes: load_class_table_from_reader(CLASS_TABLE.as_bytes()).unwrap(),
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
            },
        };

        let json = serde_json::to_string(&scenario).unwrap();
        let loaded = load_scenario_from_reader(json.as_bytes()).expect("Failed to parse scenario");
        assert_eq!(loaded.model, FleetModel::Contracted);
        assert_eq!(loaded.parameters.classes.len(), 2);
        assert_eq!(loaded.parameters.operational_years, 5);
    }
}
