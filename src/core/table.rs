use chrono::NaiveDateTime;

/// Named numeric column.
#[must_use]
#[derive(Clone, Debug, PartialEq)]
pub struct Column {
    pub name: String,
    pub values: Vec<f64>,
}

impl Column {
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self { name: name.into(), values }
    }
}

/// Timestamped numeric table: one local timestamp per row and any number of `f64` columns.
///
/// Rows are kept in the order they were read in.
#[must_use]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Table {
    timestamps: Vec<NaiveDateTime>,
    columns: Vec<Column>,
}

impl Table {
    /// # Panics
    ///
    /// When a column length differs from the number of timestamps.
    pub fn new(timestamps: Vec<NaiveDateTime>, columns: Vec<Column>) -> Self {
        for column in &columns {
            assert_eq!(
                column.values.len(),
                timestamps.len(),
                "column `{}` length mismatch",
                column.name,
            );
        }
        Self { timestamps, columns }
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.timestamps.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    #[cfg(test)]
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.columns.iter().find(|column| column.name == name).map(|column| column.values.as_slice())
    }

    /// Iterate over the rows as `(timestamp, values)` with the values in the column order.
    pub fn rows(&self) -> impl Iterator<Item = (NaiveDateTime, Vec<f64>)> + '_ {
        self.timestamps.iter().enumerate().map(|(index, timestamp)| {
            (*timestamp, self.columns.iter().map(|column| column.values[index]).collect())
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn rows_ok() {
        let timestamp = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap().and_hms_opt(0, 15, 0).unwrap();
        let table = Table::new(
            vec![timestamp],
            vec![Column::new("power", vec![5.0]), Column::new("voltage", vec![230.0])],
        );
        assert_eq!(table.len(), 1);
        assert_eq!(table.column("voltage"), Some([230.0].as_slice()));
        assert_eq!(table.column("current"), None);
        assert_eq!(table.rows().collect::<Vec<_>>(), vec![(timestamp, vec![5.0, 230.0])]);
    }

    #[test]
    #[should_panic(expected = "column `power` length mismatch")]
    fn length_mismatch() {
        let _ = Table::new(Vec::new(), vec![Column::new("power", vec![1.0])]);
    }
}
