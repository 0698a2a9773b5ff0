//! This module provides the main entry point: [`Dashboard`] loads the charging
//! stations and (optionally) a vehicle dataset and assembles everything the
//! three dashboard tabs need into a [`Report`].

use crate::config::DashboardConfig;
use crate::error::DashboardError;
use crate::stations::cache::{StationCache, StationQuery};
use crate::stations::export::stations_csv;
use crate::stations::map::MapView;
use crate::stations::regions::{RegionRanking, RegionSummary};
use crate::stations::station_loader::StationLoader;
use crate::types::month::Month;
use crate::types::station::StationRecord;
use crate::types::vehicle::VehicleRecord;
use crate::vehicles::adoption::{AdoptionSeries, FuelHistogram};
use crate::vehicles::error::VehicleDataError;
use crate::vehicles::vehicle_loader::{load_vehicles, VehicleSource};
use bon::bon;
use log::{info, warn};
use std::sync::Arc;

/// Headline numbers shown in the sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overview {
    /// Total charging points, including those without coordinates or title.
    pub station_count: usize,
    /// `None` when no vehicle dataset is loaded.
    pub vehicle_count: Option<usize>,
    /// First and last registration month in the vehicle dataset.
    pub registration_span: Option<(Month, Month)>,
}

/// The vehicle-derived sections: adoption trend and fuel histogram.
#[derive(Debug, Clone)]
pub struct VehicleReport {
    /// All loaded vehicles, dated or not.
    pub vehicles: Vec<VehicleRecord>,
    /// Cumulative registrations per month and fuel category.
    pub adoption: AdoptionSeries,
    /// Vehicles per fuel category, most common first.
    pub histogram: FuelHistogram,
}

impl VehicleReport {
    pub fn from_vehicles(vehicles: Vec<VehicleRecord>) -> Self {
        let adoption = AdoptionSeries::from_vehicles(&vehicles);
        let histogram = FuelHistogram::from_vehicles(&vehicles);
        Self {
            vehicles,
            adoption,
            histogram,
        }
    }

    /// First and last month with a dated registration.
    pub fn registration_span(&self) -> Option<(Month, Month)> {
        let months = self.adoption.months();
        Some((*months.first()?, *months.last()?))
    }
}

/// Everything the presentation layer renders.
///
/// Station sections are always present. The vehicle sections are an
/// independent `Result`: when the dataset is missing or broken, the
/// adoption tab shows a placeholder and the other tabs are unaffected.
#[derive(Debug)]
pub struct Report {
    /// The (cached) station list the report was built from.
    pub stations: Arc<[StationRecord]>,
    pub overview: Overview,
    pub map: MapView,
    /// Per-region totals in first-seen order.
    pub regions: RegionSummary,
    /// Top-K regions by station count and by fast-charger share.
    pub ranking: RegionRanking,
    pub vehicles: Result<VehicleReport, VehicleDataError>,
}

impl Report {
    /// The full station table as CSV, for the download button.
    pub fn station_csv(&self) -> Result<String, DashboardError> {
        stations_csv(&self.stations)
    }

    /// Choices for the map's region picker, in first-seen order.
    pub fn region_options(&self) -> Vec<&str> {
        self.regions.region_names()
    }
}

/// Loads the inputs and assembles [`Report`]s.
///
/// The station list is memoized in a [`StationCache`]; pass a shared cache
/// with [`Dashboard::with_cache`] to reuse one download across dashboards.
///
/// # Examples
///
/// ```no_run
/// # use laadpaal::{Dashboard, DashboardConfig, DashboardError, VehicleSource};
/// # #[tokio::main]
/// # async fn main() -> Result<(), DashboardError> {
/// let dashboard = Dashboard::new(DashboardConfig::from_env()?)?;
///
/// let report = dashboard
///     .report()
///     .vehicles(VehicleSource::path("cars.parquet"))
///     .map_region("Utrecht")
///     .call()
///     .await?;
///
/// for entry in &report.ranking.by_count {
///     println!("{}: {}", entry.region, entry.stations);
/// }
/// # Ok(())
/// # }
/// ```
pub struct Dashboard {
    config: DashboardConfig,
    loader: StationLoader,
    cache: Arc<StationCache>,
}

#[bon]
impl Dashboard {
    pub fn new(config: DashboardConfig) -> Result<Self, DashboardError> {
        Self::with_cache(config, Arc::new(StationCache::new()))
    }

    pub fn with_cache(
        config: DashboardConfig,
        cache: Arc<StationCache>,
    ) -> Result<Self, DashboardError> {
        let loader = StationLoader::new(&config)?;
        Ok(Self {
            config,
            loader,
            cache,
        })
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn cache(&self) -> &Arc<StationCache> {
        &self.cache
    }

    /// Returns the stations for `query` (default: the configured one),
    /// downloading them only when the cache holds no entry for that query.
    #[builder]
    pub async fn stations(
        &self,
        query: Option<StationQuery>,
    ) -> Result<Arc<[StationRecord]>, DashboardError> {
        let query = query.unwrap_or_else(|| self.config.query());

        // Fast path. The lock is released before the download.
        if let Some(stations) = self.cache.get(&query).await {
            return Ok(stations);
        }

        info!("Station cache miss for {:?}", query);
        let loaded = self.loader.load(&query).await?;
        Ok(self.cache.store(query, loaded).await)
    }

    /// Builds a complete report.
    ///
    /// * `.vehicles(VehicleSource)`: Optional. The registration dataset. Without
    ///   it, `Report::vehicles` is `Err(VehicleDataError::MissingDataset)`.
    /// * `.map_region(&str)`: Optional. Only show map markers whose title
    ///   contains this text.
    ///
    /// # Errors
    ///
    /// Fails with [`DashboardError::Station`] when the station list cannot be
    /// loaded. Vehicle problems never fail the report.
    #[builder]
    pub async fn report(
        &self,
        vehicles: Option<VehicleSource>,
        map_region: Option<&str>,
    ) -> Result<Report, DashboardError> {
        let stations = self.stations().call().await?;

        let map = MapView::from_stations(&stations, map_region);
        let regions = RegionSummary::from_stations(&stations);
        let ranking = RegionRanking::from_summary(&regions, self.config.top_k);

        let vehicles = load_vehicles(vehicles)
            .await
            .map(VehicleReport::from_vehicles);
        match &vehicles {
            Err(e) if e.is_missing() => info!("No vehicle dataset, skipping adoption sections"),
            Err(e) => warn!("Vehicle sections unavailable: {}", e),
            Ok(_) => {}
        }

        let overview = Overview {
            station_count: stations.len(),
            vehicle_count: vehicles.as_ref().ok().map(|v| v.vehicles.len()),
            registration_span: vehicles.as_ref().ok().and_then(|v| v.registration_span()),
        };

        Ok(Report {
            stations,
            overview,
            map,
            regions,
            ranking,
            vehicles,
        })
    }
}
