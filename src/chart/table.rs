use std::ops::RangeInclusive;

use comfy_table::{Cell, CellAlignment, Color, Table, modifiers, presets};
use itertools::{Itertools, MinMaxResult};

use crate::chart::Chart;

const BAR_WIDTH: f64 = 40.0;

/// Render the chart as a terminal table with a horizontal bar per hour.
///
/// Hours in the top third of the series' range are red, those in the bottom third are green.
#[must_use]
pub fn build_chart_table(chart: &Chart) -> Table {
    let range = value_range(&chart.points);
    let max = chart
        .points
        .iter()
        .map(|(_, value)| value.abs())
        .filter(|value| value.is_finite())
        .fold(0.0, f64::max);

    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling()
        .set_header(vec![
            Cell::new("Hour").set_alignment(CellAlignment::Right),
            Cell::new(&chart.metric).set_alignment(CellAlignment::Right),
            Cell::new(""),
        ]);
    for (hour, value) in &chart.points {
        let color = range.as_ref().map_or(Color::Reset, |range| color(*value, range));
        table.add_row(vec![
            Cell::new(format!("{hour:02}:00")).set_alignment(CellAlignment::Right),
            Cell::new(format!("{value:.2}")).set_alignment(CellAlignment::Right).fg(color),
            Cell::new(bar(*value, max)).fg(color),
        ]);
    }
    table
}

/// Range of the finite values.
fn value_range(points: &[(u32, f64)]) -> Option<RangeInclusive<f64>> {
    match points.iter().map(|(_, value)| *value).filter(|value| value.is_finite()).minmax() {
        MinMaxResult::NoElements => None,
        MinMaxResult::OneElement(value) => Some(value..=value),
        MinMaxResult::MinMax(min, max) => Some(min..=max),
    }
}

fn color(value: f64, range: &RangeInclusive<f64>) -> Color {
    let span = range.end() - range.start();
    if !value.is_finite() || span <= 0.0 {
        return Color::Reset;
    }
    let position = (value - range.start()) / span;
    if position >= 2.0 / 3.0 {
        Color::Red
    } else if position <= 1.0 / 3.0 {
        Color::Green
    } else {
        Color::DarkYellow
    }
}

#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn bar(value: f64, max: f64) -> String {
    if !value.is_finite() || max <= 0.0 {
        return String::new();
    }
    "█".repeat((value.abs() / max * BAR_WIDTH).round() as usize)
}
