pub mod hourly;
pub mod series;
pub mod table;
pub mod timestamp;
