//! The station table as a Polars frame and as the downloadable CSV file.

use crate::error::DashboardError;
use crate::types::station::StationRecord;
use polars::prelude::*;

/// File name offered for the CSV download.
pub const CSV_FILE_NAME: &str = "laadpalen.csv";
pub const CSV_MIME_TYPE: &str = "text/csv";

/// Builds a frame with one row per station.
pub fn stations_frame(stations: &[StationRecord]) -> PolarsResult<DataFrame> {
    let ids: Vec<u64> = stations.iter().map(|s| s.id).collect();
    let titles: Vec<Option<&str>> = stations.iter().map(|s| s.title.as_deref()).collect();
    let regions: Vec<Option<&str>> = stations.iter().map(|s| s.region()).collect();
    let towns: Vec<Option<&str>> = stations.iter().map(|s| s.town.as_deref()).collect();
    let postcodes: Vec<Option<&str>> = stations.iter().map(|s| s.postcode.as_deref()).collect();
    let latitudes: Vec<Option<f64>> = stations.iter().map(|s| s.location.map(|l| l.0)).collect();
    let longitudes: Vec<Option<f64>> = stations.iter().map(|s| s.location.map(|l| l.1)).collect();
    let type_ids: Vec<Option<u32>> = stations.iter().map(|s| s.connection_type_id).collect();
    let types: Vec<Option<&str>> = stations
        .iter()
        .map(|s| s.connection_type.as_deref())
        .collect();
    let levels: Vec<Option<u32>> = stations.iter().map(|s| s.level).collect();
    let power: Vec<Option<f64>> = stations.iter().map(|s| s.power_kw).collect();
    let fast: Vec<bool> = stations.iter().map(|s| s.is_fast()).collect();

    df!(
        "id" => ids,
        "title" => titles,
        "region" => regions,
        "town" => towns,
        "postcode" => postcodes,
        "latitude" => latitudes,
        "longitude" => longitudes,
        "connection_type_id" => type_ids,
        "connection_type" => types,
        "level_id" => levels,
        "power_kw" => power,
        "is_fast" => fast
    )
}

/// Serializes all stations as CSV text with a header row.
pub fn stations_csv(stations: &[StationRecord]) -> Result<String, DashboardError> {
    let mut frame = stations_frame(stations)?;
    let mut buffer = Vec::new();
    CsvWriter::new(&mut buffer)
        .include_header(true)
        .finish(&mut frame)?;
    Ok(String::from_utf8(buffer)?)
}
