use std::ops::{Add, Div};

use crate::{
    core::{
        series::AverageHourly,
        table::{Column, Table},
    },
    prelude::*,
};

/// Hour-of-day averages of a [`Table`].
///
/// Only the hours present in the source table are listed, in ascending order.
#[must_use]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HourlyTable {
    hours: Vec<u32>,
    columns: Vec<Column>,
}

impl HourlyTable {
    #[cfg(test)]
    #[must_use]
    pub fn hours(&self) -> &[u32] {
        &self.hours
    }

    #[cfg(test)]
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.hours.is_empty()
    }

    #[must_use]
    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.columns.iter().find(|column| column.name == name).map(|column| column.values.as_slice())
    }

    /// Chart points `(hour, average)` of the column.
    ///
    /// An empty table has no points regardless of the column name.
    pub fn points(&self, column: &str) -> Result<Vec<(u32, f64)>> {
        if self.is_empty() {
            return Ok(Vec::new());
        }
        let values = self.column(column).with_context(|| format!("there is no `{column}` column"))?;
        Ok(self.hours.iter().copied().zip(values.iter().copied()).collect())
    }
}

impl Table {
    /// Average every numeric column per hour of the day.
    pub fn hourly_averages(&self) -> HourlyTable {
        let averages = self.rows().map(|(timestamp, values)| (timestamp, Sample(values))).average_hourly();
        let hours = averages.keys().copied().collect();
        let columns = self
            .columns()
            .iter()
            .enumerate()
            .map(|(index, column)| {
                Column::new(column.name.clone(), averages.values().map(|sample| sample.0[index]).collect())
            })
            .collect();
        HourlyTable { hours, columns }
    }
}

/// Values of a single row, summed and divided element-wise.
struct Sample(Vec<f64>);

impl Add for Sample {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.into_iter().zip(rhs.0).map(|(lhs, rhs)| lhs + rhs).collect())
    }
}

impl Div<f64> for Sample {
    type Output = Self;

    fn div(self, rhs: f64) -> Self::Output {
        Self(self.0.into_iter().map(|value| value / rhs).collect())
    }
}
