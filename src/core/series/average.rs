use std::{
    collections::BTreeMap,
    ops::{Add, Div},
};

use chrono::Timelike;
use itertools::Itertools;

impl<T> AverageHourly for T where T: IntoIterator {}

pub trait AverageHourly {
    /// Group the values by the hour of their timestamp and take the arithmetic mean of each group.
    ///
    /// Only the hours present in the input are returned. `NaN`s are not skipped.
    #[must_use]
    fn average_hourly<K, V>(self) -> BTreeMap<u32, V>
    where
        Self: Sized + IntoIterator<Item = (K, V)>,
        K: Timelike,
        V: Add<Output = V> + Div<f64, Output = V>,
    {
        self.into_iter()
            .into_group_map_by(|(timestamp, _)| timestamp.hour())
            .into_iter()
            .filter_map(|(hour, values)| {
                #[expect(clippy::cast_precision_loss)]
                let weight = values.len() as f64;
                let sum = values.into_iter().map(|(_, value)| value).reduce(Add::add)?;
                Some((hour, sum / weight))
            })
            .collect()
    }
}
