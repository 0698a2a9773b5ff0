//! demos/dashboard.rs
//!
//! Fetches the Dutch charging points, optionally loads a vehicle dataset and
//! prints the dashboard tables. The station table is written to `laadpalen.csv`.
//!
//! To run this demo:
//! OCM_API_KEY=... cargo run --example dashboard -- [cars.parquet|cars.csv]

use laadpaal::{Dashboard, DashboardConfig, FuelCategory, VehicleSource, CSV_FILE_NAME};
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let dashboard = Dashboard::new(DashboardConfig::from_env()?)?;
    let vehicles = std::env::args().nth(1).map(VehicleSource::path);

    let report = dashboard.report().maybe_vehicles(vehicles).call().await?;

    println!("Charging points: {}", report.overview.station_count);
    println!("Markers on map:  {}", report.map.markers.len());

    println!("\nTop 10 regions by charging points");
    for (rank, entry) in report.ranking.by_count.iter().enumerate() {
        println!("{:>2}. {:<30} {:>6}", rank + 1, entry.region, entry.stations);
    }

    println!("\nTop 10 regions by fast-charger share");
    for (rank, entry) in report.ranking.by_fast_ratio.iter().enumerate() {
        println!(
            "{:>2}. {:<30} {:>5.1}%",
            rank + 1,
            entry.region,
            entry.fast_ratio * 100.0
        );
    }

    match &report.vehicles {
        Ok(vehicles) => {
            println!("\nVehicles: {}", vehicles.vehicles.len());
            if let Some((first, last)) = report.overview.registration_span {
                println!("Registrations: {first} to {last}");
            }
            for (category, count) in vehicles.histogram.counts() {
                println!("{:<10} {:>8}", category, count);
            }
            let electric = vehicles.adoption.cumulative(FuelCategory::Electric);
            println!(
                "Electric vehicles registered so far: {}",
                electric.last().copied().unwrap_or(0)
            );
        }
        Err(e) if e.is_missing() => {
            println!("\nPass a vehicle dataset path to see the adoption trend.")
        }
        Err(e) => println!("\nVehicle data unavailable: {e}"),
    }

    std::fs::write(CSV_FILE_NAME, report.station_csv()?)?;
    println!("\nWrote {CSV_FILE_NAME}");
    Ok(())
}
