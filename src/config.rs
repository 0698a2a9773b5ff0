//! Runtime settings for the station fetch and the report tables.

use crate::stations::cache::StationQuery;
use bon::Builder;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

/// Open Charge Map points-of-interest endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.openchargemap.io/v3/poi/";
pub const DEFAULT_COUNTRY_CODE: &str = "NL";
pub const DEFAULT_MAX_RESULTS: usize = 6000;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
/// Length of both region rankings.
pub const DEFAULT_TOP_K: usize = 10;

/// What the station loader does with a station that lists no connections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyConnectionPolicy {
    /// Fail the whole load with [`crate::StationError::EmptyConnections`].
    #[default]
    Reject,
    /// Drop the station and log a warning.
    Skip,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value '{value}' for {key}")]
    InvalidValue { key: String, value: String },
}

/// Settings for a [`crate::Dashboard`].
///
/// The network call is never retried; `timeout` bounds the whole request.
///
/// # Examples
///
/// ```
/// use laadpaal::DashboardConfig;
/// use std::time::Duration;
///
/// let config = DashboardConfig::builder()
///     .country_code("BE")
///     .max_results(500)
///     .timeout(Duration::from_secs(5))
///     .build();
/// assert_eq!(config.country_code, "BE");
/// assert_eq!(config.endpoint, laadpaal::DEFAULT_ENDPOINT);
/// ```
#[derive(Debug, Clone, Builder)]
pub struct DashboardConfig {
    #[builder(into, default = DEFAULT_ENDPOINT.to_string())]
    pub endpoint: String,
    #[builder(into, default = DEFAULT_COUNTRY_CODE.to_string())]
    pub country_code: String,
    #[builder(default = DEFAULT_MAX_RESULTS)]
    pub max_results: usize,
    #[builder(default = true)]
    pub compact: bool,
    #[builder(default = false)]
    pub verbose: bool,
    /// Sent as the `key` query parameter when present.
    #[builder(into)]
    pub api_key: Option<String>,
    #[builder(default = DEFAULT_TIMEOUT)]
    pub timeout: Duration,
    #[builder(default)]
    pub empty_connections: EmptyConnectionPolicy,
    #[builder(default = DEFAULT_TOP_K)]
    pub top_k: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl DashboardConfig {
    /// Reads overrides from the environment (and a `.env` file, if any).
    ///
    /// Recognized variables: `OCM_API_KEY`, `OCM_ENDPOINT`, `OCM_COUNTRY_CODE`,
    /// `OCM_MAX_RESULTS` and `OCM_TIMEOUT_SECS`. Unset variables keep their
    /// defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let max_results = parse_var::<usize>(&lookup, "OCM_MAX_RESULTS")?;
        let timeout = parse_var::<u64>(&lookup, "OCM_TIMEOUT_SECS")?.map(Duration::from_secs);
        Ok(Self::builder()
            .maybe_endpoint(lookup("OCM_ENDPOINT"))
            .maybe_country_code(lookup("OCM_COUNTRY_CODE"))
            .maybe_max_results(max_results)
            .maybe_api_key(lookup("OCM_API_KEY").filter(|key| !key.is_empty()))
            .maybe_timeout(timeout)
            .build())
    }

    /// Cache key for the station list this configuration fetches.
    pub fn query(&self) -> StationQuery {
        StationQuery::new(&self.country_code, self.max_results)
    }
}

fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Result<Option<T>, ConfigError> {
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue {
                key: key.to_string(),
                value: raw,
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = DashboardConfig::default();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.country_code, "NL");
        assert_eq!(config.max_results, 6000);
        assert!(config.compact);
        assert!(!config.verbose);
        assert_eq!(config.api_key, None);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.empty_connections, EmptyConnectionPolicy::Reject);
        assert_eq!(config.top_k, 10);
    }

    #[test]
    fn test_from_lookup_overrides() -> Result<(), ConfigError> {
        let config = DashboardConfig::from_lookup(lookup_from(&[
            ("OCM_API_KEY", "secret"),
            ("OCM_COUNTRY_CODE", "DE"),
            ("OCM_MAX_RESULTS", " 250 "),
            ("OCM_TIMEOUT_SECS", "4"),
        ]))?;
        assert_eq!(config.api_key.as_deref(), Some("secret"));
        assert_eq!(config.country_code, "DE");
        assert_eq!(config.max_results, 250);
        assert_eq!(config.timeout, Duration::from_secs(4));
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        Ok(())
    }

    #[test]
    fn test_from_lookup_empty_key_is_none() -> Result<(), ConfigError> {
        let config = DashboardConfig::from_lookup(lookup_from(&[("OCM_API_KEY", "")]))?;
        assert_eq!(config.api_key, None);
        Ok(())
    }

    #[test]
    fn test_from_lookup_invalid_number() {
        let result = DashboardConfig::from_lookup(lookup_from(&[("OCM_MAX_RESULTS", "lots")]));
        match result {
            Err(ConfigError::InvalidValue { key, value }) => {
                assert_eq!(key, "OCM_MAX_RESULTS");
                assert_eq!(value, "lots");
            }
            other => panic!("expected InvalidValue, got {:?}", other),
        }
    }

    #[test]
    fn test_query_matches_config() {
        let config = DashboardConfig::builder()
            .country_code("BE")
            .max_results(10)
            .build();
        assert_eq!(config.query(), StationQuery::new("BE", 10));
    }
}
