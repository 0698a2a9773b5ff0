mod config;
mod dashboard;
mod error;
mod stations;
mod types;
mod vehicles;

pub use config::*;
pub use dashboard::*;
pub use error::DashboardError;

pub use stations::cache::{StationCache, StationQuery};
pub use stations::error::StationError;
pub use stations::export::{stations_csv, stations_frame, CSV_FILE_NAME, CSV_MIME_TYPE};
pub use stations::map::{MapView, Marker, MAP_CENTER, MAP_ZOOM};
pub use stations::regions::{
    derive_region, RegionCount, RegionFastRatio, RegionRanking, RegionStats, RegionSummary,
};
pub use stations::station_loader::{parse_stations, StationLoader};

pub use types::fuel_category::{FuelCategory, ParseFuelCategoryError};
pub use types::month::Month;
pub use types::station::{LatLon, StationRecord, FAST_CHARGER_LEVEL};
pub use types::vehicle::VehicleRecord;

pub use vehicles::adoption::{AdoptionSeries, FuelHistogram};
pub use vehicles::error::VehicleDataError;
pub use vehicles::fuel::{classify, classify_opt, KEYWORD_GROUPS};
pub use vehicles::vehicle_loader::{
    extract_vehicles, load_vehicles, parse_registration_date, read_vehicles, VehicleFormat,
    VehicleSource, MODEL_COLUMN, REGISTRATION_COLUMN,
};
