mod svg;
mod table;

use std::{fs, path::Path};

use bon::Builder;

pub use self::{svg::draw_svg, table::build_chart_table};
use crate::prelude::*;

/// Line chart of an hour-of-day series.
#[must_use]
#[derive(Builder)]
pub struct Chart {
    #[builder(into)]
    pub title: String,

    /// Y-axis label.
    #[builder(into)]
    pub metric: String,

    /// `(hour, value)` points, ordered by the hour.
    #[builder(default)]
    pub points: Vec<(u32, f64)>,
}

impl Chart {
    /// File name for the chart's rendered image, derived from its title.
    #[must_use]
    pub fn file_name(&self) -> String {
        let stem: String = self
            .title
            .chars()
            .map(|char| if char.is_alphanumeric() || char == '-' { char } else { '_' })
            .collect();
        format!("{stem}.svg")
    }
}

/// Charts accumulated over the run and shown all together at the end.
#[must_use]
#[derive(Default)]
pub struct Charts(Vec<Chart>);

impl Charts {
    pub fn push(&mut self, chart: Chart) {
        self.0.push(chart);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Chart> {
        self.0.iter()
    }

    /// Print every chart and draw it as an SVG line chart into the directory.
    #[instrument(skip_all, fields(n_charts = self.0.len()))]
    pub fn show(&self, directory: &Path) -> Result {
        fs::create_dir_all(directory)
            .with_context(|| format!("failed to create `{}`", directory.display()))?;
        for chart in self.iter() {
            println!("{}\n{}", chart.title, build_chart_table(chart));
            let path = directory.join(chart.file_name());
            draw_svg(chart, &path)?;
            info!(path = %path.display(), "drawn");
        }
        info!("shown all the charts");
        Ok(())
    }
}
