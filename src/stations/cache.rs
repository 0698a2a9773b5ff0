use crate::types::station::StationRecord;
use log::{debug, info};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Parameters that identify one station download.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StationQuery {
    /// ISO 3166 country code, e.g. "NL".
    pub country_code: String,
    /// Upper bound on the number of stations the API returns.
    pub max_results: usize,
}

impl StationQuery {
    pub fn new(country_code: &str, max_results: usize) -> Self {
        Self {
            country_code: country_code.to_string(),
            max_results,
        }
    }
}

struct Slot {
    query: StationQuery,
    stations: Arc<[StationRecord]>,
}

/// Single-slot memo for the station list.
///
/// Holds the result of the last load together with the query it was loaded
/// for. Share it between dashboards with an `Arc` to reuse one download.
#[derive(Default)]
pub struct StationCache {
    slot: Mutex<Option<Slot>>,
}

impl StationCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached stations if they were loaded for `query`.
    pub async fn get(&self, query: &StationQuery) -> Option<Arc<[StationRecord]>> {
        let slot = self.slot.lock().await;
        match slot.as_ref() {
            Some(cached) if &cached.query == query => {
                debug!("Station cache hit for {:?}", query);
                Some(cached.stations.clone())
            }
            _ => None,
        }
    }

    /// Stores `stations` for `query` and returns the shared list now in the slot.
    ///
    /// An entry for a different query is replaced. If another caller already
    /// stored the same query while this one was loading, that entry is kept
    /// and returned instead.
    pub async fn store(
        &self,
        query: StationQuery,
        stations: Vec<StationRecord>,
    ) -> Arc<[StationRecord]> {
        let mut slot = self.slot.lock().await;
        if let Some(cached) = slot.as_ref() {
            if cached.query == query {
                return cached.stations.clone();
            }
        }
        let stations: Arc<[StationRecord]> = stations.into();
        *slot = Some(Slot {
            query,
            stations: stations.clone(),
        });
        stations
    }

    /// Drops the cached list so the next report downloads again.
    pub async fn invalidate(&self) {
        if self.slot.lock().await.take().is_some() {
            info!("Station cache invalidated");
        }
    }

    pub async fn is_empty(&self) -> bool {
        self.slot.lock().await.is_none()
    }
}
