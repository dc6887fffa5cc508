use std::{ops::Range, path::Path};

use plotters::prelude::*;

use crate::{chart::Chart, prelude::*};

const SIZE: (u32, u32) = (1024, 640);
const HOURS: Range<u32> = 0..24;

/// Draw the chart as an SVG line chart over the hours of the day.
#[instrument(skip_all, fields(title = %chart.title))]
pub fn draw_svg(chart: &Chart, path: &Path) -> Result {
    let points = chart.points.iter().copied().filter(|(_, value)| value.is_finite()).collect::<Vec<_>>();

    let root = SVGBackend::new(path, SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(|error| anyhow!("failed to fill the background: {error}"))?;

    let mut context = ChartBuilder::on(&root)
        .caption(&chart.title, ("sans-serif", 24))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(HOURS, value_range(&points))
        .map_err(|error| anyhow!("failed to build the chart: {error}"))?;
    context
        .configure_mesh()
        .x_labels(24)
        .x_desc("Hour of the day")
        .y_desc(&chart.metric)
        .draw()
        .map_err(|error| anyhow!("failed to draw the mesh: {error}"))?;
    context
        .draw_series(LineSeries::new(points, &BLUE))
        .map_err(|error| anyhow!("failed to draw the series: {error}"))?;

    root.present().map_err(|error| anyhow!("failed to write `{}`: {error}", path.display()))?;
    Ok(())
}

/// Y-axis range covering all the values, with some room when they are all the same.
fn value_range(points: &[(u32, f64)]) -> Range<f64> {
    let (min, max) = points
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), (_, value)| {
            (min.min(*value), max.max(*value))
        });
    if min > max {
        0.0..1.0
    } else if (max - min).abs() < f64::EPSILON {
        (min - 1.0)..(max + 1.0)
    } else {
        min..max
    }
}
