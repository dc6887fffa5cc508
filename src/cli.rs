use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    /// Directory with the `<country>.csv` price exports.
    #[clap(long, env = "PRICE_DIR", default_value = "electricityData")]
    pub price_dir: PathBuf,

    /// Country which price export to chart.
    #[clap(long, env = "COUNTRY", default_value = "Spain")]
    pub country: String,

    /// Directory with a CSV log per smart plug.
    #[clap(long, env = "DEVICES_DIR", default_value = "devices")]
    pub devices_dir: PathBuf,

    /// Name of the device info file, which is not a device log.
    #[clap(long, env = "INFO_FILE", default_value = "0_smart_plugs_devices")]
    pub info_file: String,

    /// Directory to draw the SVG line charts into.
    #[clap(long, env = "CHARTS_DIR", default_value = "charts")]
    pub charts_dir: PathBuf,
}
