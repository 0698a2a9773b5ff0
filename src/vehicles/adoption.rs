//! Cumulative adoption per fuel category and the fuel histogram.

use crate::types::fuel_category::FuelCategory;
use crate::types::month::Month;
use crate::types::vehicle::VehicleRecord;
use polars::prelude::*;
use std::collections::BTreeMap;

const CATEGORY_COUNT: usize = FuelCategory::ALL.len();

/// Running total of registered vehicles per fuel category, by month.
///
/// Only months in which at least one dated vehicle was registered appear,
/// in ascending order. Each of the five categories has a value for every
/// month (zero before its first registration), and those values never
/// decrease. Vehicles without a registration date are not counted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdoptionSeries {
    months: Vec<Month>,
    cumulative: Vec<[u64; CATEGORY_COUNT]>,
}

impl AdoptionSeries {
    pub fn from_vehicles(vehicles: &[VehicleRecord]) -> Self {
        let mut per_month: BTreeMap<Month, [u64; CATEGORY_COUNT]> = BTreeMap::new();
        for vehicle in vehicles {
            let Some(month) = vehicle.registration_month() else {
                continue;
            };
            per_month.entry(month).or_insert([0; CATEGORY_COUNT])[vehicle.fuel().index()] += 1;
        }

        let mut running = [0u64; CATEGORY_COUNT];
        let (months, cumulative) = per_month
            .into_iter()
            .map(|(month, counts)| {
                for (total, count) in running.iter_mut().zip(counts) {
                    *total += count;
                }
                (month, running)
            })
            .unzip();

        Self { months, cumulative }
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    pub fn months(&self) -> &[Month] {
        &self.months
    }

    /// Cumulative counts of `category`, aligned with [`Self::months`].
    pub fn cumulative(&self, category: FuelCategory) -> Vec<u64> {
        self.cumulative
            .iter()
            .map(|row| row[category.index()])
            .collect()
    }

    /// Cumulative count of `category` at `month`, if that month is in the series.
    pub fn get(&self, month: Month, category: FuelCategory) -> Option<u64> {
        self.months
            .binary_search(&month)
            .ok()
            .map(|i| self.cumulative[i][category.index()])
    }

    /// Latest cumulative count per category.
    pub fn totals(&self) -> [(FuelCategory, u64); CATEGORY_COUNT] {
        let last = self.cumulative.last().copied().unwrap_or_default();
        FuelCategory::ALL.map(|category| (category, last[category.index()]))
    }

    /// Long form for line charts: columns `month`, `fuel`, `vehicles`, one row
    /// per month and category.
    pub fn to_long_frame(&self) -> PolarsResult<DataFrame> {
        let rows = self.months.len() * CATEGORY_COUNT;
        let mut months = Vec::with_capacity(rows);
        let mut fuels = Vec::with_capacity(rows);
        let mut vehicles = Vec::with_capacity(rows);
        for (month, counts) in self.months.iter().zip(&self.cumulative) {
            for category in FuelCategory::ALL {
                months.push(month.to_string());
                fuels.push(category.label());
                vehicles.push(counts[category.index()]);
            }
        }
        df!(
            "month" => months,
            "fuel" => fuels,
            "vehicles" => vehicles
        )
    }

    /// Wide form: a `month` column plus one column per category label.
    pub fn to_wide_frame(&self) -> PolarsResult<DataFrame> {
        let months: Vec<String> = self.months.iter().map(Month::to_string).collect();
        let mut columns = vec![Column::new("month".into(), months)];
        for category in FuelCategory::ALL {
            columns.push(Column::new(
                category.label().into(),
                self.cumulative(category),
            ));
        }
        DataFrame::new(columns)
    }
}

/// Number of vehicles per fuel category, most common first.
///
/// Counts every vehicle, dated or not. Categories without vehicles are left
/// out; equal counts keep category declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FuelHistogram {
    counts: Vec<(FuelCategory, u64)>,
}

impl FuelHistogram {
    pub fn from_vehicles(vehicles: &[VehicleRecord]) -> Self {
        let mut totals = [0u64; CATEGORY_COUNT];
        for vehicle in vehicles {
            totals[vehicle.fuel().index()] += 1;
        }
        let mut counts: Vec<(FuelCategory, u64)> = FuelCategory::ALL
            .into_iter()
            .map(|category| (category, totals[category.index()]))
            .filter(|(_, count)| *count > 0)
            .collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        Self { counts }
    }

    pub fn counts(&self) -> &[(FuelCategory, u64)] {
        &self.counts
    }

    pub fn get(&self, category: FuelCategory) -> u64 {
        self.counts
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }

    /// Columns `fuel`, `vehicles`.
    pub fn to_frame(&self) -> PolarsResult<DataFrame> {
        let fuels: Vec<&str> = self.counts.iter().map(|(c, _)| c.label()).collect();
        let vehicles: Vec<u64> = self.counts.iter().map(|(_, n)| *n).collect();
        df!(
            "fuel" => fuels,
            "vehicles" => vehicles
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn vehicle(name: &str, date: Option<(i32, u32, u32)>) -> VehicleRecord {
        VehicleRecord::new(
            Some(name.to_string()),
            date.and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d)),
        )
    }

    fn fleet() -> Vec<VehicleRecord> {
        vec![
            vehicle("Model 3 EV", Some((2021, 3, 2))),
            vehicle("Yaris", Some((2021, 1, 20))),
            vehicle("Kona Electric", Some((2021, 3, 28))),
            vehicle("Golf Diesel", Some((2020, 12, 1))),
            vehicle("Corolla Hybrid", Some((2021, 1, 3))),
            vehicle("Aygo", None),
            vehicle("Polo", Some((2021, 3, 15))),
        ]
    }

    #[test]
    fn test_months_are_ascending_and_undated_excluded() {
        let series = AdoptionSeries::from_vehicles(&fleet());
        assert_eq!(
            series.months(),
            &[Month::new(12, 2020), Month::new(1, 2021), Month::new(3, 2021)]
        );
        let total_counted: u64 = series.totals().iter().map(|(_, n)| n).sum();
        assert_eq!(total_counted, 6);
    }

    #[test]
    fn test_cumulative_values() {
        let series = AdoptionSeries::from_vehicles(&fleet());
        assert_eq!(series.cumulative(FuelCategory::Electric), vec![0, 0, 2]);
        assert_eq!(series.cumulative(FuelCategory::Gasoline), vec![0, 1, 2]);
        assert_eq!(series.cumulative(FuelCategory::Diesel), vec![1, 1, 1]);
        assert_eq!(series.cumulative(FuelCategory::Hybrid), vec![0, 1, 1]);
        assert_eq!(series.cumulative(FuelCategory::Hydrogen), vec![0, 0, 0]);
        assert_eq!(
            series.get(Month::new(1, 2021), FuelCategory::Gasoline),
            Some(1)
        );
        assert_eq!(series.get(Month::new(2, 2021), FuelCategory::Gasoline), None);
    }

    #[test]
    fn test_input_order_does_not_matter() {
        let forward = fleet();
        let expected = AdoptionSeries::from_vehicles(&forward);

        let mut reversed = forward.clone();
        reversed.reverse();
        assert_eq!(AdoptionSeries::from_vehicles(&reversed), expected);

        for shift in 1..forward.len() {
            let mut rotated = forward.clone();
            rotated.rotate_left(shift);
            assert_eq!(AdoptionSeries::from_vehicles(&rotated), expected);
        }
    }

    #[test]
    fn test_non_decreasing_per_category() {
        let mut vehicles = Vec::new();
        for i in 0..200u32 {
            let name = ["ID.4", "Yaris", "Passat Diesel", "Outlander PHEV"][(i % 4) as usize];
            vehicles.push(vehicle(name, Some((2015 + (i % 7) as i32, 1 + i % 12, 1))));
        }
        let series = AdoptionSeries::from_vehicles(&vehicles);
        for category in FuelCategory::ALL {
            let values = series.cumulative(category);
            assert!(values.windows(2).all(|w| w[0] <= w[1]), "{category} decreased");
        }
    }

    #[test]
    fn test_no_dated_vehicles_is_empty() {
        let series = AdoptionSeries::from_vehicles(&[vehicle("Yaris", None)]);
        assert!(series.is_empty());
        assert_eq!(series.totals()[0], (FuelCategory::Electric, 0));
    }

    #[test]
    fn test_frames() -> PolarsResult<()> {
        let series = AdoptionSeries::from_vehicles(&fleet());

        let long = series.to_long_frame()?;
        assert_eq!(long.shape(), (15, 3));
        assert_eq!(long.column("month")?.str()?.get(0), Some("2020-12"));
        assert_eq!(long.column("fuel")?.str()?.get(0), Some("electric"));

        let wide = series.to_wide_frame()?;
        assert_eq!(wide.shape(), (3, 6));
        assert_eq!(wide.column("electric")?.u64()?.get(2), Some(2));
        Ok(())
    }

    #[test]
    fn test_histogram() -> PolarsResult<()> {
        let histogram = FuelHistogram::from_vehicles(&fleet());
        assert_eq!(
            histogram.counts(),
            &[
                (FuelCategory::Gasoline, 3),
                (FuelCategory::Electric, 2),
                (FuelCategory::Hybrid, 1),
                (FuelCategory::Diesel, 1),
            ]
        );
        assert_eq!(histogram.get(FuelCategory::Hydrogen), 0);
        assert_eq!(histogram.to_frame()?.height(), 4);
        Ok(())
    }
}
