//! Groups charging stations by region and ranks the regions.
//!
//! A region is the text after the last comma of a station title, which for
//! Dutch addresses is usually the municipality ("Laadpunt Stationsplein,
//! Utrecht" → "Utrecht").
//!
//! Rankings are stable: when two regions have the same count (or the same
//! fast-charger ratio) the one that appears first in the station list ranks
//! higher.

use crate::types::station::StationRecord;
use ordered_float::OrderedFloat;
use polars::prelude::*;
use serde::Serialize;
use std::cmp::Reverse;
use std::collections::HashMap;

/// Derives a region name from a station title.
///
/// Returns the trimmed text after the last comma. Trailing commas are ignored,
/// so `"Foo, "` yields `"Foo"`. A title without a comma yields the whole
/// trimmed title, and a title of only commas yields an empty string.
///
/// # Examples
///
/// ```
/// use laadpaal::derive_region;
///
/// assert_eq!(derive_region("Fast Charger, Amsterdam"), "Amsterdam");
/// assert_eq!(derive_region("DepotX"), "DepotX");
/// ```
pub fn derive_region(title: &str) -> &str {
    let title = title.trim_end_matches(|c: char| c == ',' || c.is_whitespace());
    match title.rsplit_once(',') {
        Some((_, tail)) => tail.trim(),
        None => title.trim(),
    }
}

/// Station totals for one region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionStats {
    pub region: String,
    pub stations: usize,
    /// Stations whose representative connector is level 3.
    pub fast_chargers: usize,
}

impl RegionStats {
    /// Share of this region's stations that are fast chargers, in `[0, 1]`.
    ///
    /// `None` for a region without stations, where the ratio is undefined.
    pub fn fast_ratio(&self) -> Option<f64> {
        if self.stations == 0 {
            None
        } else {
            Some(self.fast_chargers as f64 / self.stations as f64)
        }
    }
}

/// Per-region station counts, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegionSummary {
    regions: Vec<RegionStats>,
}

impl RegionSummary {
    /// Counts stations and fast chargers per region. Stations without a region
    /// (no title) are not counted.
    pub fn from_stations(stations: &[StationRecord]) -> Self {
        let mut regions: Vec<RegionStats> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();

        for station in stations {
            let Some(region) = station.region() else {
                continue;
            };
            let position = *index.entry(region).or_insert_with(|| {
                regions.push(RegionStats {
                    region: region.to_string(),
                    stations: 0,
                    fast_chargers: 0,
                });
                regions.len() - 1
            });
            let stats = &mut regions[position];
            stats.stations += 1;
            if station.is_fast() {
                stats.fast_chargers += 1;
            }
        }

        Self { regions }
    }

    pub fn get(&self, region: &str) -> Option<&RegionStats> {
        self.regions.iter().find(|stats| stats.region == region)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RegionStats> {
        self.regions.iter()
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Distinct region names in first-seen order.
    pub fn region_names(&self) -> Vec<&str> {
        self.regions.iter().map(|stats| stats.region.as_str()).collect()
    }

    /// The `k` regions with the most stations, most first.
    pub fn top_by_count(&self, k: usize) -> Vec<RegionCount> {
        let mut ranked: Vec<RegionCount> = self
            .regions
            .iter()
            .map(|stats| RegionCount {
                region: stats.region.clone(),
                stations: stats.stations,
            })
            .collect();
        ranked.sort_by_key(|entry| Reverse(entry.stations));
        ranked.truncate(k);
        ranked
    }

    /// The `k` regions with the highest fast-charger share, highest first.
    pub fn top_by_fast_ratio(&self, k: usize) -> Vec<RegionFastRatio> {
        let mut ranked: Vec<RegionFastRatio> = self
            .regions
            .iter()
            .filter_map(|stats| {
                stats.fast_ratio().map(|fast_ratio| RegionFastRatio {
                    region: stats.region.clone(),
                    fast_ratio,
                })
            })
            .collect();
        ranked.sort_by_key(|entry| Reverse(OrderedFloat(entry.fast_ratio)));
        ranked.truncate(k);
        ranked
    }
}

/// One row of the "most charging points" table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionCount {
    /// Region name, see [`derive_region`].
    pub region: String,
    /// Number of stations in the region.
    pub stations: usize,
}

/// One row of the "highest fast-charger share" table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionFastRatio {
    /// Region name, see [`derive_region`].
    pub region: String,
    /// Fast chargers divided by stations, in `[0, 1]`.
    pub fast_ratio: f64,
}

/// The two top-K tables of the regions tab.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegionRanking {
    /// Regions with the most stations, descending.
    pub by_count: Vec<RegionCount>,
    /// Regions with the highest fast-charger share, descending.
    pub by_fast_ratio: Vec<RegionFastRatio>,
}

impl RegionRanking {
    /// Takes the top `k` regions of both rankings.
    pub fn from_summary(summary: &RegionSummary, k: usize) -> Self {
        Self {
            by_count: summary.top_by_count(k),
            by_fast_ratio: summary.top_by_fast_ratio(k),
        }
    }

    /// Columns `region`, `stations`.
    pub fn count_frame(&self) -> PolarsResult<DataFrame> {
        let regions: Vec<&str> = self.by_count.iter().map(|e| e.region.as_str()).collect();
        let stations: Vec<u64> = self.by_count.iter().map(|e| e.stations as u64).collect();
        df!(
            "region" => regions,
            "stations" => stations
        )
    }

    /// Columns `region`, `fast_ratio`.
    pub fn fast_ratio_frame(&self) -> PolarsResult<DataFrame> {
        let regions: Vec<&str> = self
            .by_fast_ratio
            .iter()
            .map(|e| e.region.as_str())
            .collect();
        let ratios: Vec<f64> = self.by_fast_ratio.iter().map(|e| e.fast_ratio).collect();
        df!(
            "region" => regions,
            "fast_ratio" => ratios
        )
    }
}
