mod average;

pub use self::average::AverageHourly;
