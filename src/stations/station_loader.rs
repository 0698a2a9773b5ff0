use crate::config::{DashboardConfig, EmptyConnectionPolicy};
use crate::stations::cache::StationQuery;
use crate::stations::error::StationError;
use crate::types::ocm::OcmPoi;
use crate::types::station::{LatLon, StationRecord};
use log::{debug, info, warn};
use reqwest::Client;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Fetches charging points from the Open Charge Map API.
///
/// Every call to [`StationLoader::load`] performs exactly one GET request;
/// memoization is the job of [`crate::StationCache`].
pub struct StationLoader {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
    compact: bool,
    verbose: bool,
    empty_connections: EmptyConnectionPolicy,
}

impl StationLoader {
    pub fn new(config: &DashboardConfig) -> Result<Self, StationError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(StationError::ClientBuild)?;
        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone(),
            compact: config.compact,
            verbose: config.verbose,
            empty_connections: config.empty_connections,
        })
    }

    /// Downloads and flattens the stations for `query`.
    pub async fn load(&self, query: &StationQuery) -> Result<Vec<StationRecord>, StationError> {
        let body = self.download(query).await?;
        let policy = self.empty_connections;
        let stations =
            tokio::task::spawn_blocking(move || parse_stations(&body, policy)).await??;
        info!(
            "Loaded {} stations for country {} from {}",
            stations.len(),
            query.country_code,
            self.endpoint
        );
        Ok(stations)
    }

    async fn download(&self, query: &StationQuery) -> Result<Vec<u8>, StationError> {
        // The API key goes into the query string; errors and logs only carry the bare endpoint.
        let url = self.endpoint.clone();
        info!(
            "Requesting up to {} stations for {} from {}",
            query.max_results, query.country_code, url
        );

        let mut request = self.client.get(&url).query(&[
            ("output", "json".to_string()),
            ("countrycode", query.country_code.clone()),
            ("maxresults", query.max_results.to_string()),
            ("compact", self.compact.to_string()),
            ("verbose", self.verbose.to_string()),
        ]);
        if let Some(key) = &self.api_key {
            request = request.query(&[("key", key)]);
        }

        let response = request
            .send()
            .await
            .map_err(|e| StationError::DataUnavailable(url.clone(), e.without_url()))?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                let e = e.without_url();
                warn!("HTTP error for {}: {:?}", url, e);
                return Err(match e.status() {
                    Some(status) => StationError::HttpStatus {
                        url,
                        status,
                        source: e,
                    },
                    None => StationError::DataUnavailable(url, e),
                });
            }
        };

        let body = response
            .bytes()
            .await
            .map_err(|e| StationError::DataUnavailable(url.clone(), e.without_url()))?;
        debug!("Received {} bytes of station JSON", body.len());
        Ok(body.to_vec())
    }
}

/// Decodes an Open Charge Map JSON array into station records.
///
/// Only the first connection of each station is kept. Stations without any
/// connection are handled according to `policy`.
pub fn parse_stations(
    body: &[u8],
    policy: EmptyConnectionPolicy,
) -> Result<Vec<StationRecord>, StationError> {
    let pois: Vec<OcmPoi> = serde_json::from_slice(body)?;
    let mut stations = Vec::with_capacity(pois.len());
    let mut skipped = 0usize;

    for poi in pois {
        match flatten(poi) {
            Ok(station) => stations.push(station),
            Err(StationError::EmptyConnections { station_id })
                if policy == EmptyConnectionPolicy::Skip =>
            {
                debug!("Skipping station {} without connections", station_id);
                skipped += 1;
            }
            Err(e) => return Err(e),
        }
    }

    if skipped > 0 {
        warn!("Skipped {} stations without connections", skipped);
    }
    Ok(stations)
}

fn flatten(poi: OcmPoi) -> Result<StationRecord, StationError> {
    let station_id = poi.id;
    let first = poi
        .connections
        .and_then(|connections| connections.into_iter().next())
        .ok_or(StationError::EmptyConnections { station_id })?;

    let address = poi.address_info;
    let location = match (address.latitude, address.longitude) {
        (Some(lat), Some(lon)) if lat.is_finite() && lon.is_finite() => Some(LatLon(lat, lon)),
        _ => None,
    };

    Ok(StationRecord::builder()
        .id(station_id)
        .maybe_title(address.title)
        .maybe_town(address.town)
        .maybe_postcode(address.postcode)
        .maybe_location(location)
        .maybe_connection_type_id(first.connection_type_id)
        .maybe_connection_type(first.connection_type.and_then(|t| t.title))
        .maybe_level(first.level_id)
        .maybe_power_kw(first.power_kw)
        .build())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYLOAD: &str = r#"[
        {
            "ID": 101,
            "UUID": "ignored",
            "AddressInfo": {
                "Title": "Fast Charger, Amsterdam",
                "Town": "Amsterdam",
                "Postcode": "1011AB",
                "Latitude": 52.37,
                "Longitude": 4.89
            },
            "Connections": [
                {"ConnectionTypeID": 33, "ConnectionType": {"Title": "CCS (Type 2)"}, "LevelID": 3, "PowerKW": 50.0},
                {"ConnectionTypeID": 25, "LevelID": 2, "PowerKW": 22.0}
            ]
        },
        {
            "ID": 102,
            "AddressInfo": {"Title": "DepotX", "Latitude": null, "Longitude": null},
            "Connections": [{"ConnectionTypeID": 25, "LevelID": 2}]
        }
    ]"#;

    #[test]
    fn test_parse_takes_first_connection() -> Result<(), StationError> {
        let stations = parse_stations(PAYLOAD.as_bytes(), EmptyConnectionPolicy::Reject)?;
        assert_eq!(stations.len(), 2);

        let first = &stations[0];
        assert_eq!(first.id, 101);
        assert_eq!(first.region(), Some("Amsterdam"));
        assert_eq!(first.location, Some(LatLon(52.37, 4.89)));
        assert_eq!(first.connection_type_id, Some(33));
        assert_eq!(first.connection_type.as_deref(), Some("CCS (Type 2)"));
        assert_eq!(first.level, Some(3));
        assert_eq!(first.power_kw, Some(50.0));
        assert!(first.is_fast());
        Ok(())
    }

    #[test]
    fn test_parse_keeps_stations_without_coordinates() -> Result<(), StationError> {
        let stations = parse_stations(PAYLOAD.as_bytes(), EmptyConnectionPolicy::Reject)?;
        let depot = &stations[1];
        assert_eq!(depot.location, None);
        assert_eq!(depot.region(), Some("DepotX"));
        assert_eq!(depot.connection_type, None);
        assert!(!depot.is_fast());
        Ok(())
    }

    #[test]
    fn test_empty_connections_rejected() {
        let body = r#"[{"ID": 5, "AddressInfo": {"Title": "A, X"}, "Connections": []}]"#;
        let err = parse_stations(body.as_bytes(), EmptyConnectionPolicy::Reject).unwrap_err();
        assert!(matches!(err, StationError::EmptyConnections { station_id: 5 }));
        assert!(err.is_malformed());
        assert!(!err.is_unavailable());
    }

    #[test]
    fn test_missing_connections_rejected() {
        let body = r#"[{"ID": 6, "AddressInfo": {"Title": "A, X"}}]"#;
        let err = parse_stations(body.as_bytes(), EmptyConnectionPolicy::Reject).unwrap_err();
        assert!(matches!(err, StationError::EmptyConnections { station_id: 6 }));
    }

    #[test]
    fn test_empty_connections_skipped() -> Result<(), StationError> {
        let body = r#"[
            {"ID": 5, "AddressInfo": {"Title": "A, X"}, "Connections": []},
            {"ID": 6, "AddressInfo": {"Title": "B, X"}, "Connections": [{"LevelID": 1}]}
        ]"#;
        let stations = parse_stations(body.as_bytes(), EmptyConnectionPolicy::Skip)?;
        assert_eq!(stations.len(), 1);
        assert_eq!(stations[0].id, 6);
        Ok(())
    }

    #[test]
    fn test_missing_address_info_is_malformed() {
        let body = r#"[{"ID": 9, "Connections": [{"LevelID": 1}]}]"#;
        let err = parse_stations(body.as_bytes(), EmptyConnectionPolicy::Reject).unwrap_err();
        assert!(matches!(err, StationError::MalformedResponse(_)));
        assert!(err.is_malformed());
    }

    #[test]
    fn test_non_array_body_is_malformed() {
        let body = r#"{"error": "invalid key"}"#;
        let err = parse_stations(body.as_bytes(), EmptyConnectionPolicy::Reject).unwrap_err();
        assert!(matches!(err, StationError::MalformedResponse(_)));
    }
}
