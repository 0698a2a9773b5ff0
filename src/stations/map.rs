use crate::types::station::{LatLon, StationRecord};
use serde::Serialize;

/// Initial map center, roughly the middle of the Netherlands.
pub const MAP_CENTER: LatLon = LatLon(52.1, 5.3);
/// Initial zoom level, showing the whole country.
pub const MAP_ZOOM: u8 = 8;

const UNKNOWN_CONNECTION_TYPE: &str = "Onbekend";

/// One clustered marker on the charging-point map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    /// Id of the [`StationRecord`] this marker belongs to.
    pub station_id: u64,
    pub location: LatLon,
    /// HTML snippet shown when the marker is clicked.
    pub popup: String,
}

/// Everything the map renderer needs: a starting viewport and the markers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapView {
    pub center: LatLon,
    pub zoom: u8,
    /// One marker per station with coordinates, in station order.
    pub markers: Vec<Marker>,
}

impl MapView {
    /// Builds markers for all stations that have coordinates.
    ///
    /// With a `region_filter`, only stations whose title contains that text
    /// are shown, matching the region picker of the dashboard sidebar.
    pub fn from_stations(stations: &[StationRecord], region_filter: Option<&str>) -> Self {
        let markers = stations
            .iter()
            .filter(|station| match region_filter {
                Some(filter) => station
                    .title
                    .as_deref()
                    .is_some_and(|title| title.contains(filter)),
                None => true,
            })
            .filter_map(|station| {
                station.location.map(|location| Marker {
                    station_id: station.id,
                    location,
                    popup: popup_text(station),
                })
            })
            .collect();

        Self {
            center: MAP_CENTER,
            zoom: MAP_ZOOM,
            markers,
        }
    }
}

fn popup_text(station: &StationRecord) -> String {
    format!(
        "{}<br>Type: {}",
        station.title.as_deref().unwrap_or(""),
        station
            .connection_type
            .as_deref()
            .unwrap_or(UNKNOWN_CONNECTION_TYPE)
    )
}
