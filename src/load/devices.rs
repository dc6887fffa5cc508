use std::{collections::BTreeMap, ffi::OsStr, fs, path::Path};

use crate::{
    core::{table::Table, timestamp::parse_timestamp},
    error::LoadError,
    load::raw::RawCsv,
    prelude::*,
};

/// Power column name in the device logs.
pub const POWER: &str = "power";

const TIMESTAMP: &str = "timestamp";
const EXTENSION: &str = "csv";

/// Device logs keyed by the device name.
pub type Devices = BTreeMap<String, Table>;

/// Load every device log from the directory, except for the device info file.
///
/// The device name is the file name up to its first dot. Hidden files are skipped.
/// The first malformed file fails the whole load.
#[instrument(skip_all, fields(directory = %directory.display()))]
pub fn load_devices(directory: &Path, info_file: &str) -> Result<Devices, LoadError> {
    let mut devices = Devices::new();

    for entry in fs::read_dir(directory).map_err(|error| LoadError::io(directory, error))? {
        let path = entry.map_err(|error| LoadError::io(directory, error))?.path();
        if !path.is_file() || path.extension().is_none_or(|extension| extension != EXTENSION) {
            continue;
        }
        let Some(file_name) = path.file_name().and_then(OsStr::to_str) else {
            warn!(path = %path.display(), "skipping the non-UTF-8 file name");
            continue;
        };
        if file_name.starts_with('.') {
            debug!(file_name, "skipping the hidden file");
            continue;
        }
        let name = file_name.split_once('.').map_or(file_name, |(name, _)| name);
        if name == info_file {
            debug!(name, "skipping the device info file");
            continue;
        }

        let readings = RawCsv::read(&path)?.into_table(TIMESTAMP, parse_timestamp)?;
        if readings.is_empty() {
            warn!(name, "the device has no readings");
        } else {
            info!(name, n_rows = readings.len(), "loaded the device");
        }
        if devices.insert(name.to_string(), readings).is_some() {
            warn!(name, path = %path.display(), "the device is listed more than once, keeping the last one");
        }
    }

    info!(n_devices = devices.len(), "loaded the devices");
    Ok(devices)
}
