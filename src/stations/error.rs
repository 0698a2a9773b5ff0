use thiserror::Error;

#[derive(Debug, Error)]
pub enum StationError {
    #[error("Failed to build HTTP client")]
    ClientBuild(#[source] reqwest::Error),

    // Connection failures, timeouts and body read errors
    #[error("Network request failed for {0}")]
    DataUnavailable(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to parse station JSON")]
    MalformedResponse(#[from] serde_json::Error),

    #[error("Station {station_id} lists no connections")]
    EmptyConnections { station_id: u64 },

    #[error("Background task failed to complete")]
    TaskJoin(#[from] tokio::task::JoinError),
}

impl StationError {
    /// The upstream API could not be reached or refused the request.
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            StationError::DataUnavailable(..) | StationError::HttpStatus { .. }
        )
    }

    /// The upstream API answered with something that is not a station list.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            StationError::MalformedResponse(_) | StationError::EmptyConnections { .. }
        )
    }
}
