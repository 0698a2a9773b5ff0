use crate::types::fuel_category::FuelCategory;
use crate::types::month::Month;
use crate::vehicles::fuel::classify_opt;
use chrono::NaiveDate;
use serde::Serialize;

/// One registered vehicle.
///
/// The fuel category is assigned once, from the trade name, when the record is
/// created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VehicleRecord {
    name: Option<String>,
    first_registration: Option<NaiveDate>,
    fuel: FuelCategory,
}

impl VehicleRecord {
    pub fn new(name: Option<String>, first_registration: Option<NaiveDate>) -> Self {
        let fuel = classify_opt(name.as_deref());
        Self {
            name,
            first_registration,
            fuel,
        }
    }

    /// Trade name ("handelsbenaming").
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Date of first admission; `None` when the source value did not parse.
    pub fn first_registration(&self) -> Option<NaiveDate> {
        self.first_registration
    }

    pub fn registration_month(&self) -> Option<Month> {
        self.first_registration.map(Month::from)
    }

    pub fn fuel(&self) -> FuelCategory {
        self.fuel
    }
}
