use std::path::Path;

use crate::{
    core::{
        table::{Column, Table},
        timestamp::parse_price_timestamp,
    },
    error::LoadError,
    load::raw::RawCsv,
    prelude::*,
};

/// Price column name after loading.
pub const PRICE: &str = "price";

const SOURCE_TIMESTAMP: &str = "Datetime (Local)";
const SOURCE_PRICE: &str = "Price (EUR/MWhe)";

/// Load the country's price series from `<directory>/<country>.csv`.
///
/// Only the local timestamp and the price columns are kept, everything else in the file is ignored.
#[instrument(skip_all, fields(country = country))]
pub fn load_prices(directory: &Path, country: &str) -> Result<Table, LoadError> {
    let csv = RawCsv::read(&directory.join(format!("{country}.csv")))?;
    let timestamps = csv.timestamps(SOURCE_TIMESTAMP, parse_price_timestamp)?;
    let prices = csv.numeric(SOURCE_PRICE)?;
    info!(n_rows = csv.len(), "loaded prices");
    Ok(Table::new(timestamps, vec![Column::new(PRICE, prices)]))
}
