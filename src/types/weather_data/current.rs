use crate::types::condition_style::{classify, ConditionStyle};
use crate::types::lat_lon::LatLon;
use crate::types::weather_condition::WeatherCondition;

/// Current conditions for the queried city, in metric units.
#[derive(Debug, PartialEq, Clone)]
pub struct CurrentWeather {
    /// Place name as resolved by the provider.
    pub name: String,
    /// ISO country code, when the provider reports one.
    pub country: Option<String>,
    pub coordinates: LatLon,
    /// °C
    pub temperature: f64,
    /// °C
    pub feels_like: f64,
    /// Relative humidity, percent.
    pub humidity: f64,
    /// m/s
    pub wind_speed: f64,
    /// Primary category exactly as reported (e.g. `"Rain"`, `"Mist"`).
    pub category: String,
    pub description: String,
    /// Provider icon code such as `"10d"`.
    pub icon: Option<String>,
}

impl CurrentWeather {
    pub fn condition(&self) -> Option<WeatherCondition> {
        WeatherCondition::from_category(&self.category)
    }

    pub fn style(&self) -> &'static ConditionStyle {
        classify(&self.category)
    }
}
