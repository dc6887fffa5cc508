use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use csv::{Position, StringRecord};

use crate::{
    core::table::{Column, Table},
    error::LoadError,
    prelude::*,
};

/// CSV file read into memory as is, before any column gets interpreted.
pub struct RawCsv {
    path: PathBuf,
    headers: StringRecord,
    records: Vec<StringRecord>,
}

impl RawCsv {
    pub fn read(path: &Path) -> Result<Self, LoadError> {
        if !path.is_file() {
            return Err(LoadError::FileNotFound { path: path.to_path_buf() });
        }
        let mut reader = csv::Reader::from_path(path).map_err(|error| load_error(path, error))?;
        let headers = reader.headers().map_err(|error| load_error(path, error))?.clone();
        let records = reader
            .records()
            .collect::<Result<Vec<_>, _>>()
            .map_err(|error| load_error(path, error))?;
        Ok(Self { path: path.to_path_buf(), headers, records })
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.records.len()
    }

    /// Parse the timestamp column with the specified parser.
    pub fn timestamps(
        &self,
        column: &str,
        parse: impl Fn(&str) -> Option<NaiveDateTime>,
    ) -> Result<Vec<NaiveDateTime>, LoadError> {
        let index = self.index_of(column)?;
        self.records
            .iter()
            .map(|record| {
                let text = &record[index];
                parse(text).ok_or_else(|| LoadError::Parse {
                    path: self.path.clone(),
                    line: line_of(record),
                    reason: format!("`{text}` is not a valid `{column}`"),
                })
            })
            .collect()
    }

    /// Parse the required numeric column. Empty cells become `NaN`.
    pub fn numeric(&self, column: &str) -> Result<Vec<f64>, LoadError> {
        let index = self.index_of(column)?;
        self.records
            .iter()
            .map(|record| {
                let text = &record[index];
                parse_number(text).ok_or_else(|| LoadError::Parse {
                    path: self.path.clone(),
                    line: line_of(record),
                    reason: format!("`{text}` is not a valid `{column}`"),
                })
            })
            .collect()
    }

    /// Convert into a [`Table`] keeping all the numeric columns.
    ///
    /// A file without any header becomes an empty table.
    pub fn into_table(
        self,
        timestamp_column: &str,
        parse: impl Fn(&str) -> Option<NaiveDateTime>,
    ) -> Result<Table, LoadError> {
        if self.headers.is_empty() {
            warn!(path = %self.path.display(), "the file has no header");
            return Ok(Table::default());
        }
        let timestamp_index = self.index_of(timestamp_column)?;
        let timestamps = self.timestamps(timestamp_column, parse)?;
        let columns = self
            .headers
            .iter()
            .enumerate()
            .filter(|(index, _)| *index != timestamp_index)
            .filter_map(|(index, name)| {
                let values = self
                    .records
                    .iter()
                    .map(|record| parse_number(&record[index]))
                    .collect::<Option<Vec<_>>>();
                if values.is_none() {
                    debug!(path = %self.path.display(), column = name, "dropping the non-numeric column");
                }
                values.map(|values| Column::new(name, values))
            })
            .collect();
        Ok(Table::new(timestamps, columns))
    }

    fn index_of(&self, column: &str) -> Result<usize, LoadError> {
        self.headers.iter().position(|header| header == column).ok_or_else(|| {
            LoadError::SchemaMismatch { path: self.path.clone(), column: column.to_string() }
        })
    }
}

/// Cells which stand for a missing value, as spreadsheet and dataframe exports write them.
const MISSING: [&str; 18] = [
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN", "<NA>",
    "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

fn parse_number(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() || MISSING.contains(&text) { Some(f64::NAN) } else { text.parse().ok() }
}

fn line_of(record: &StringRecord) -> u64 {
    record.position().map_or(0, Position::line)
}

fn load_error(path: &Path, error: csv::Error) -> LoadError {
    let line = error.position().map_or(0, Position::line);
    let reason = error.to_string();
    match error.into_kind() {
        csv::ErrorKind::Io(source) => LoadError::io(path, source),
        _ => LoadError::Parse { path: path.to_path_buf(), line, reason },
    }
}

#[cfg(test)]
mod tests {
    use std::{fs, io};

    use approx::assert_abs_diff_eq;
    use tempfile::TempDir;

    use super::*;
    use crate::core::timestamp::parse_timestamp;

    fn write(directory: &TempDir, name: &str, contents: &str) -> PathBuf {
        let path = directory.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn numeric_columns_only() -> Result {
        let directory = TempDir::new()?;
        let path = write(
            &directory,
            "plug.csv",
            "timestamp,power,state,voltage\n\
             2023-01-01 00:15:00,10.5,on,230\n\
             2023-01-01 01:15:00,,off,231\n",
        );
        let table = RawCsv::read(&path)?.into_table("timestamp", parse_timestamp)?;
        assert_eq!(table.len(), 2);
        let names: Vec<_> = table.columns().iter().map(|column| column.name.as_str()).collect();
        assert_eq!(names, ["power", "voltage"]);
        let power = table.column("power").unwrap();
        assert!(power[1].is_nan());
        Ok(())
    }

    #[test]
    fn missing_value_markers() -> Result {
        let directory = TempDir::new()?;
        let path = write(
            &directory,
            "plug.csv",
            "timestamp,power\n\
             2023-01-01 00:15:00,12.5\n\
             2023-01-01 00:30:00,NA\n\
             2023-01-01 00:45:00,null\n\
             2023-01-01 01:00:00,#N/A\n",
        );
        let table = RawCsv::read(&path)?.into_table("timestamp", parse_timestamp)?;
        let power = table.column("power").unwrap();
        assert_eq!(power.len(), 4);
        assert_abs_diff_eq!(power[0], 12.5);
        assert!(power[1..].iter().all(|value| value.is_nan()));
        Ok(())
    }

    #[test]
    fn header_only() -> Result {
        let directory = TempDir::new()?;
        let path = write(&directory, "plug.csv", "timestamp,power\n");
        let table = RawCsv::read(&path)?.into_table("timestamp", parse_timestamp)?;
        assert!(table.is_empty());
        assert_eq!(table.column("power"), Some([].as_slice()));
        Ok(())
    }

    #[test]
    fn no_header() -> Result {
        let directory = TempDir::new()?;
        let path = write(&directory, "plug.csv", "");
        let table = RawCsv::read(&path)?.into_table("timestamp", parse_timestamp)?;
        assert!(table.is_empty());
        assert!(table.columns().is_empty());
        Ok(())
    }

    #[test]
    fn missing_file() {
        let directory = TempDir::new().unwrap();
        let result = RawCsv::read(&directory.path().join("nope.csv"));
        assert!(matches!(result, Err(LoadError::FileNotFound { .. })));
    }

    #[test]
    fn missing_timestamp_column() -> Result {
        let directory = TempDir::new()?;
        let path = write(&directory, "plug.csv", "time,power\n2023-01-01 00:00:00,1\n");
        let result = RawCsv::read(&path)?.into_table("timestamp", parse_timestamp);
        assert!(matches!(result, Err(LoadError::SchemaMismatch { column, .. }) if column == "timestamp"));
        Ok(())
    }

    #[test]
    fn bad_timestamp_names_the_line() -> Result {
        let directory = TempDir::new()?;
        let path = write(
            &directory,
            "plug.csv",
            "timestamp,power\n2023-01-01 00:00:00,1\nwhenever,2\n",
        );
        let result = RawCsv::read(&path)?.into_table("timestamp", parse_timestamp);
        assert!(matches!(result, Err(LoadError::Parse { line: 3, .. })));
        Ok(())
    }

    #[test]
    fn ragged_rows() {
        let directory = TempDir::new().unwrap();
        let path = write(&directory, "plug.csv", "timestamp,power\n2023-01-01 00:00:00,1,2\n");
        let error = RawCsv::read(&path).err().unwrap();
        assert!(matches!(error, LoadError::Parse { .. }));
        assert!(error.to_string().contains("plug.csv"));
    }

    #[test]
    fn io_failure_is_not_a_parse_error() {
        let path = Path::new("plug.csv");
        let denied = csv::Error::from(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        assert!(matches!(load_error(path, denied), LoadError::Io { .. }));
        let gone = csv::Error::from(io::Error::from(io::ErrorKind::NotFound));
        assert!(matches!(load_error(path, gone), LoadError::FileNotFound { .. }));
    }

    #[test]
    fn required_numeric_column() -> Result {
        let directory = TempDir::new()?;
        let path = write(&directory, "Spain.csv", "price\n1.5\nfree\n");
        let csv = RawCsv::read(&path)?;
        assert_eq!(csv.len(), 2);
        assert!(matches!(csv.numeric("price"), Err(LoadError::Parse { line: 3, .. })));
        Ok(())
    }
}
