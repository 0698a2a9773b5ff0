//! demos/adoption_plot.rs
//!
//! Plots cumulative electric vs. gasoline registrations from a vehicle dataset
//! using the `plotlars` crate.
//!
//! To run this demo:
//! cargo run --example adoption_plot --features demos -- cars.parquet

use laadpaal::{load_vehicles, AdoptionSeries, VehicleSource};
use plotlars::{Legend, Line, Plot, Rgb, Text, TimeSeriesPlot};
use polars::prelude::*;
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let source = std::env::args().nth(1).map(VehicleSource::path);
    let vehicles = load_vehicles(source).await?;
    let series = AdoptionSeries::from_vehicles(&vehicles);
    if series.is_empty() {
        println!("No dated registrations in the dataset.");
        return Ok(());
    }

    let frame = series.to_wide_frame()?;
    plot_adoption(&frame);
    println!("Plot shown in browser.");
    Ok(())
}

fn plot_adoption(data: &DataFrame) {
    TimeSeriesPlot::builder()
        .data(data)
        .x("month")
        .y("electric")
        .additional_series(vec!["gasoline"])
        .colors(vec![Rgb(220, 40, 40), Rgb(40, 80, 220)])
        .lines(vec![Line::Solid, Line::Solid])
        .plot_title(Text::from("EV vs Benzine: groeitrend").size(18))
        .legend(&Legend::new().x(0.05).y(0.9))
        .x_title("Maand")
        .y_title("Aantal voertuigen")
        .build()
        .plot();
}
