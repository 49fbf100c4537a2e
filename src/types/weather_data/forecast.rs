use chrono::NaiveDateTime;

/// One step of the multi-day forecast.
///
/// `timestamp` is wall-clock time at the queried city, so its hour and
/// calendar date are the ones a local reader would expect.
#[derive(Debug, PartialEq, Clone)]
pub struct ForecastEntry {
    pub timestamp: NaiveDateTime,
    /// °C
    pub temperature: f64,
    /// °C
    pub feels_like: f64,
    /// Relative humidity, percent.
    pub humidity: f64,
    /// m/s
    pub wind_speed: f64,
    pub category: String,
    pub description: String,
}
