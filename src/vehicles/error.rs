use polars::error::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VehicleDataError {
    // Expected empty state: the user has not provided a dataset yet
    #[error("No vehicle dataset provided")]
    MissingDataset,

    #[error("Required column '{column}' not found in vehicle dataset")]
    MalformedDataset { column: String },

    #[error("Failed to read vehicle dataset '{0}'")]
    Read(PathBuf, #[source] std::io::Error),

    #[error("Failed to decode vehicle dataset")]
    Decode(#[source] PolarsError),

    #[error("Column '{column}' cannot be read as text")]
    ColumnType {
        column: String,
        #[source]
        source: PolarsError,
    },

    #[error("Background task failed to complete")]
    TaskJoin(#[from] tokio::task::JoinError),
}

impl VehicleDataError {
    pub fn is_missing(&self) -> bool {
        matches!(self, VehicleDataError::MissingDataset)
    }
}
