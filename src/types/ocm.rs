//! Wire schema of the Open Charge Map `poi` endpoint.
//!
//! Only the fields the pipeline reads are listed; unknown fields are ignored.
//! `ID` and `AddressInfo` are required, everything else may be absent or null.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct OcmPoi {
    #[serde(rename = "ID")]
    pub id: u64,
    pub address_info: OcmAddressInfo,
    #[serde(default)]
    pub connections: Option<Vec<OcmConnection>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct OcmAddressInfo {
    pub title: Option<String>,
    pub town: Option<String>,
    pub postcode: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OcmConnection {
    #[serde(rename = "ConnectionTypeID")]
    pub connection_type_id: Option<u32>,
    #[serde(rename = "ConnectionType")]
    pub connection_type: Option<OcmConnectionType>,
    #[serde(rename = "LevelID")]
    pub level_id: Option<u32>,
    #[serde(rename = "PowerKW")]
    pub power_kw: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct OcmConnectionType {
    pub title: Option<String>,
}
