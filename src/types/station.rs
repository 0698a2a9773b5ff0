//! Defines the normalized charging-station record handed to the aggregators,
//! the map view and the CSV export.

use crate::stations::regions::derive_region;
use bon::bon;
use serde::Serialize;

/// Upstream charger level of a fast (DC) charger.
pub const FAST_CHARGER_LEVEL: u32 = 3;

/// Represents a geographical coordinate using latitude and longitude.
///
/// Latitude is the first element (index 0), and longitude is the second (index 1).
///
/// # Examples
///
/// ```
/// use laadpaal::LatLon;
///
/// let utrecht = LatLon(52.0907, 5.1214);
/// assert_eq!(utrecht.0, 52.0907);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatLon(pub f64, pub f64);

/// A single public charging point.
///
/// The connection fields describe only the *first* connector the upstream
/// API lists for the station. The region is derived from the title when the
/// record is built and cannot be set independently.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationRecord {
    /// Upstream point-of-interest identifier.
    pub id: u64,
    /// Free-text address title, usually "name, place".
    pub title: Option<String>,
    /// Town or city from the address block.
    pub town: Option<String>,
    /// Dutch postcode, e.g. "3511 AX".
    pub postcode: Option<String>,
    /// `None` when the upstream record has no usable coordinates.
    pub location: Option<LatLon>,
    /// Upstream connector type identifier (25 = Type 2, 33 = CCS, ...).
    pub connection_type_id: Option<u32>,
    /// Human readable connector name, only present in non-compact responses.
    pub connection_type: Option<String>,
    /// Upstream charger level; see [`FAST_CHARGER_LEVEL`].
    pub level: Option<u32>,
    /// Rated power of the first connector in kW.
    pub power_kw: Option<f64>,
    region: Option<String>,
}

#[bon]
impl StationRecord {
    /// Builds a record, deriving its region from `title`.
    ///
    /// # Examples
    ///
    /// ```
    /// use laadpaal::StationRecord;
    ///
    /// let station = StationRecord::builder()
    ///     .id(1)
    ///     .title("Fast Charger, Amsterdam")
    ///     .level(3)
    ///     .build();
    /// assert_eq!(station.region(), Some("Amsterdam"));
    /// assert!(station.is_fast());
    /// ```
    #[builder]
    pub fn new(
        id: u64,
        #[builder(into)] title: Option<String>,
        #[builder(into)] town: Option<String>,
        #[builder(into)] postcode: Option<String>,
        location: Option<LatLon>,
        connection_type_id: Option<u32>,
        #[builder(into)] connection_type: Option<String>,
        level: Option<u32>,
        power_kw: Option<f64>,
    ) -> Self {
        let region = title
            .as_deref()
            .map(derive_region)
            .filter(|region| !region.is_empty())
            .map(str::to_owned);
        Self {
            id,
            title,
            town,
            postcode,
            location,
            connection_type_id,
            connection_type,
            level,
            power_kw,
            region,
        }
    }

    /// The region this station is counted under, if it has a title.
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Whether the first connector is a fast (level 3) charger.
    pub fn is_fast(&self) -> bool {
        self.level == Some(FAST_CHARGER_LEVEL)
    }
}
