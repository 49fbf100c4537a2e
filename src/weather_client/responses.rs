//! OpenWeatherMap and WAQI response payloads and their conversion into the
//! crate's own types.

use crate::types::air_quality::AirQualityReading;
use crate::types::lat_lon::LatLon;
use crate::types::weather_data::current::CurrentWeather;
use crate::types::weather_data::forecast::ForecastEntry;
use crate::weather_client::error::{AirQualityError, FetchError};
use chrono::DateTime;
use serde::Deserialize;

// ============================================================================
// OpenWeatherMap
// ============================================================================

#[derive(Debug, Deserialize)]
pub(crate) struct Coord {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Condition {
    pub main: String,
    pub description: String,
    pub icon: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MainReadings {
    pub temp: f64,
    pub feels_like: f64,
    pub humidity: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Wind {
    pub speed: f64,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Sys {
    pub country: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CurrentResponse {
    pub coord: Coord,
    #[serde(default)]
    pub weather: Vec<Condition>,
    pub main: MainReadings,
    pub wind: Wind,
    #[serde(default)]
    pub sys: Sys,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ForecastItem {
    pub dt: i64,
    pub main: MainReadings,
    #[serde(default)]
    pub weather: Vec<Condition>,
    pub wind: Wind,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ForecastCity {
    /// Shift from UTC in seconds.
    #[serde(default)]
    pub timezone: i32,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ForecastResponse {
    pub list: Vec<ForecastItem>,
    #[serde(default)]
    pub city: ForecastCity,
}

impl CurrentResponse {
    pub fn into_current(self) -> CurrentWeather {
        let condition = self.weather.into_iter().next();
        let (category, description, icon) = match condition {
            Some(c) => (c.main, c.description, c.icon),
            None => (String::new(), String::new(), None),
        };
        CurrentWeather {
            name: self.name,
            country: self.sys.country.filter(|c| !c.is_empty()),
            coordinates: LatLon(self.coord.lat, self.coord.lon),
            temperature: self.main.temp,
            feels_like: self.main.feels_like,
            humidity: self.main.humidity,
            wind_speed: self.wind.speed,
            category,
            description,
            icon,
        }
    }
}

impl ForecastResponse {
    /// Converts the provider list into entries in city-local time, keeping order.
    pub fn into_entries(self) -> Result<Vec<ForecastEntry>, FetchError> {
        let offset_seconds = self.city.timezone;
        self.list
            .into_iter()
            .map(|item| {
                let timestamp = item
                    .dt
                    .checked_add(i64::from(offset_seconds))
                    .and_then(|local| DateTime::from_timestamp(local, 0))
                    .ok_or(FetchError::InvalidTimestamp {
                        timestamp: item.dt,
                        offset_seconds,
                    })?
                    .naive_utc();
                let (category, description) = item
                    .weather
                    .into_iter()
                    .next()
                    .map(|c| (c.main, c.description))
                    .unwrap_or_default();
                Ok(ForecastEntry {
                    timestamp,
                    temperature: item.main.temp,
                    feels_like: item.main.feels_like,
                    humidity: item.main.humidity,
                    wind_speed: item.wind.speed,
                    category,
                    description,
                })
            })
            .collect()
    }
}

// ============================================================================
// WAQI
// ============================================================================

#[derive(Debug, Deserialize)]
pub(crate) struct AirQualityEnvelope {
    pub status: String,
    #[serde(default)]
    pub data: serde_json::Value,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AirQualityData {
    pub aqi: serde_json::Value,
    /// WAQI spells the field this way.
    pub dominentpol: Option<String>,
}

impl AirQualityEnvelope {
    /// Anything but `status: "ok"` with an integer index counts as no data.
    pub fn into_reading(self) -> Result<AirQualityReading, AirQualityError> {
        if self.status != "ok" {
            return Err(AirQualityError::NotOk(self.status));
        }
        let data: AirQualityData =
            serde_json::from_value(self.data).map_err(AirQualityError::Payload)?;
        let index = data
            .aqi
            .as_i64()
            .ok_or_else(|| AirQualityError::InvalidIndex(data.aqi.clone()))?;
        Ok(AirQualityReading {
            index,
            dominant_pollutant: data.dominentpol.filter(|p| !p.is_empty()),
        })
    }
}
