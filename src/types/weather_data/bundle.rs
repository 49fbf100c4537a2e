use crate::types::air_quality::AirQualityReading;
use crate::types::pollen::PollenEstimate;
use crate::types::weather_data::current::CurrentWeather;
use crate::types::weather_data::forecast::ForecastEntry;

/// Everything fetched and derived for one city query.
#[derive(Debug, PartialEq, Clone)]
pub struct WeatherBundle {
    pub current: CurrentWeather,
    /// Ordered by timestamp, as the provider returned it.
    pub forecast: Vec<ForecastEntry>,
    /// `None` when the air quality feed had no usable data.
    pub air_quality: Option<AirQualityReading>,
    pub pollen: PollenEstimate,
}
