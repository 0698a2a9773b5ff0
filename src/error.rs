use crate::config::ConfigError;
use crate::stations::error::StationError;
use crate::vehicles::error::VehicleDataError;
use polars::error::PolarsError;
use std::string::FromUtf8Error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error(transparent)]
    Station(#[from] StationError),

    #[error(transparent)]
    Vehicle(#[from] VehicleDataError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to build report frame")]
    Frame(#[from] PolarsError),

    #[error("CSV export is not valid UTF-8")]
    CsvEncoding(#[from] FromUtf8Error),
}
