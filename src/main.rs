#![allow(clippy::doc_markdown)]
#![doc = include_str!("../README.md")]

mod chart;
mod cli;
mod core;
mod error;
mod load;
mod prelude;

use clap::{Parser, crate_version};

use crate::{
    chart::{Chart, Charts},
    cli::Args,
    load::{POWER, PRICE, load_devices, load_prices},
    prelude::*,
};

const PRICE_CHART_TITLE: &str = "Average price per hour of the day";

fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().init();
    info!(version = crate_version!(), "starting…");

    let args = Args::parse();
    build_charts(&args)?.show(&args.charts_dir)?;

    info!("done!");
    Ok(())
}

/// Load the prices and the devices and chart their hour-of-day averages.
///
/// The price chart goes first, followed by a chart per device.
#[instrument(skip_all)]
fn build_charts(args: &Args) -> Result<Charts> {
    let mut charts = Charts::default();

    let prices = load_prices(&args.price_dir, &args.country)?;
    charts.push(
        Chart::builder()
            .title(PRICE_CHART_TITLE)
            .metric(PRICE)
            .points(prices.hourly_averages().points(PRICE)?)
            .build(),
    );

    for (name, readings) in load_devices(&args.devices_dir, &args.info_file)? {
        let points = readings
            .hourly_averages()
            .points(POWER)
            .with_context(|| format!("failed to chart the `{name}` device"))?;
        charts.push(Chart::builder().title(name).metric(POWER).points(points).build());
    }

    Ok(charts)
}
