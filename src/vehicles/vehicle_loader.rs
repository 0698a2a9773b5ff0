use crate::types::vehicle::VehicleRecord;
use crate::vehicles::error::VehicleDataError;
use chrono::NaiveDate;
use log::{info, warn};
use polars::prelude::*;
use std::io::Cursor;
use std::path::{Path, PathBuf};

/// Trade name column of the RDW registration dataset.
pub const MODEL_COLUMN: &str = "handelsbenaming";
/// First admission date column, `YYYYMMDD` text or integers, or a date type.
pub const REGISTRATION_COLUMN: &str = "datum_eerste_toelating";

/// Serialization of a vehicle dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleFormat {
    Parquet,
    /// Comma separated, with a header row.
    Csv,
}

impl VehicleFormat {
    /// `.csv` files are read as CSV, everything else as Parquet.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => VehicleFormat::Csv,
            _ => VehicleFormat::Parquet,
        }
    }
}

/// Where the vehicle dataset comes from: a local file or an upload.
#[derive(Debug, Clone)]
pub enum VehicleSource {
    Path(PathBuf),
    Bytes {
        data: Vec<u8>,
        format: VehicleFormat,
    },
}

impl VehicleSource {
    pub fn path(path: impl Into<PathBuf>) -> Self {
        VehicleSource::Path(path.into())
    }

    pub fn parquet_bytes(data: impl Into<Vec<u8>>) -> Self {
        VehicleSource::Bytes {
            data: data.into(),
            format: VehicleFormat::Parquet,
        }
    }

    pub fn csv_bytes(data: impl Into<Vec<u8>>) -> Self {
        VehicleSource::Bytes {
            data: data.into(),
            format: VehicleFormat::Csv,
        }
    }
}

/// Loads vehicles on a blocking task.
///
/// `None` yields [`VehicleDataError::MissingDataset`], which callers should
/// show as a prompt to upload a dataset rather than as a failure.
pub async fn load_vehicles(
    source: Option<VehicleSource>,
) -> Result<Vec<VehicleRecord>, VehicleDataError> {
    let source = source.ok_or(VehicleDataError::MissingDataset)?;
    tokio::task::spawn_blocking(move || read_vehicles(source)).await?
}

/// Reads and decodes a vehicle dataset.
pub fn read_vehicles(source: VehicleSource) -> Result<Vec<VehicleRecord>, VehicleDataError> {
    let (data, format) = match source {
        VehicleSource::Path(path) => {
            let format = VehicleFormat::from_path(&path);
            let data = std::fs::read(&path).map_err(|e| VehicleDataError::Read(path.clone(), e))?;
            info!("Read {} bytes of vehicle data from {:?}", data.len(), path);
            (data, format)
        }
        VehicleSource::Bytes { data, format } => (data, format),
    };

    let frame = decode_frame(data, format)?;
    extract_vehicles(frame)
}

fn decode_frame(data: Vec<u8>, format: VehicleFormat) -> Result<DataFrame, VehicleDataError> {
    let cursor = Cursor::new(data);
    match format {
        VehicleFormat::Parquet => ParquetReader::new(cursor).finish(),
        VehicleFormat::Csv => CsvReader::new(cursor).finish(),
    }
    .map_err(VehicleDataError::Decode)
}

/// Turns a decoded frame into records.
///
/// The model column is cast to text. A `Date` or `Datetime` registration
/// column is read as calendar dates; any other type is cast to text and
/// parsed with [`parse_registration_date`], so integer dates (`20200115`)
/// work as well as strings.
pub fn extract_vehicles(frame: DataFrame) -> Result<Vec<VehicleRecord>, VehicleDataError> {
    for column in [MODEL_COLUMN, REGISTRATION_COLUMN] {
        if frame.column(column).is_err() {
            return Err(VehicleDataError::MalformedDataset {
                column: column.to_string(),
            });
        }
    }

    let temporal = matches!(
        frame.column(REGISTRATION_COLUMN).map(|c| c.dtype()),
        Ok(DataType::Date | DataType::Datetime(..))
    );
    let registration = if temporal {
        col(REGISTRATION_COLUMN).cast(DataType::Date)
    } else {
        col(REGISTRATION_COLUMN).cast(DataType::String)
    };

    let selected = frame
        .lazy()
        .select([col(MODEL_COLUMN).cast(DataType::String), registration])
        .collect()
        .map_err(|e| VehicleDataError::ColumnType {
            column: format!("{}/{}", MODEL_COLUMN, REGISTRATION_COLUMN),
            source: e,
        })?;

    let names = text_column(&selected, MODEL_COLUMN)?;
    let dates: Vec<Option<NaiveDate>> = if temporal {
        date_column(&selected, REGISTRATION_COLUMN)?
            .as_date_iter()
            .collect()
    } else {
        text_column(&selected, REGISTRATION_COLUMN)?
            .into_iter()
            .map(|raw| raw.and_then(parse_registration_date))
            .collect()
    };

    let vehicles: Vec<VehicleRecord> = names
        .into_iter()
        .zip(dates)
        .map(|(name, date)| VehicleRecord::new(name.map(str::to_owned), date))
        .collect();

    let undated = vehicles
        .iter()
        .filter(|v| v.first_registration().is_none())
        .count();
    if undated > 0 {
        warn!(
            "{} of {} vehicles have no usable registration date",
            undated,
            vehicles.len()
        );
    }
    info!("Loaded {} vehicles", vehicles.len());
    Ok(vehicles)
}

fn text_column<'a>(
    frame: &'a DataFrame,
    column: &str,
) -> Result<&'a StringChunked, VehicleDataError> {
    frame
        .column(column)
        .and_then(|c| c.str())
        .map_err(|e| VehicleDataError::ColumnType {
            column: column.to_string(),
            source: e,
        })
}

fn date_column<'a>(
    frame: &'a DataFrame,
    column: &str,
) -> Result<&'a DateChunked, VehicleDataError> {
    frame
        .column(column)
        .and_then(|c| c.as_materialized_series().date())
        .map_err(|e| VehicleDataError::ColumnType {
            column: column.to_string(),
            source: e,
        })
}

/// Parses a textual registration date in `YYYYMMDD` form.
///
/// `YYYY-MM-DD` and the `YYYYMMDD.0` text of float columns are accepted too.
/// Anything else is `None`.
pub fn parse_registration_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    let raw = raw.strip_suffix(".0").unwrap_or(raw);
    NaiveDate::parse_from_str(raw, "%Y%m%d")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"))
        .ok()
}
