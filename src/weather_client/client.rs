//! The HTTP client that gathers everything the dashboard shows for a city.

use crate::config::{DashboardConfig, DEFAULT_AIR_QUALITY_BASE_URL, DEFAULT_WEATHER_BASE_URL};
use crate::types::pollen::PollenEstimate;
use crate::types::weather_data::bundle::WeatherBundle;
use crate::weather_client::air_quality::fetch_air_quality;
use crate::weather_client::error::{Endpoint, FetchError};
use crate::weather_client::responses::{CurrentResponse, ForecastResponse};
use bon::bon;
use log::{debug, info, warn};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Upper bound for a single provider request, connect to last byte.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Fetches current weather, forecast and air quality for a city.
///
/// The API key and token are held privately and never appear in logs or
/// error messages.
///
/// # Example
///
/// ```no_run
/// use weatherpro::{FetchError, WeatherClient};
///
/// # async fn run() -> Result<(), FetchError> {
/// let client = WeatherClient::builder()
///     .api_key("my-openweathermap-key")
///     .air_quality_token("my-waqi-token")
///     .build()?;
///
/// let bundle = client.fetch("London").await?;
/// println!("{} °C in {}", bundle.current.temperature, bundle.current.name);
/// # Ok(())
/// # }
/// ```
pub struct WeatherClient {
    http: Client,
    api_key: String,
    air_quality_token: Option<String>,
    weather_base_url: String,
    air_quality_base_url: String,
}

#[bon]
impl WeatherClient {
    /// Creates a client.
    ///
    /// This method uses a builder pattern.
    ///
    /// # Arguments
    ///
    /// * `.api_key(..)`: **Required.** OpenWeatherMap key.
    /// * `.air_quality_token(..)`: Optional WAQI token. Without it air quality is skipped.
    /// * `.weather_base_url(..)`: Optional, defaults to the public OpenWeatherMap 2.5 API.
    /// * `.air_quality_base_url(..)`: Optional, defaults to the public WAQI feed.
    /// * `.request_timeout(Duration)`: Optional, defaults to [`DEFAULT_REQUEST_TIMEOUT`].
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::ClientBuild`] if the underlying HTTP client cannot be created.
    #[builder]
    pub fn new(
        #[builder(into)] api_key: String,
        #[builder(into)] air_quality_token: Option<String>,
        #[builder(into)] weather_base_url: Option<String>,
        #[builder(into)] air_quality_base_url: Option<String>,
        request_timeout: Option<Duration>,
    ) -> Result<Self, FetchError> {
        let http = Client::builder()
            .timeout(request_timeout.unwrap_or(DEFAULT_REQUEST_TIMEOUT))
            .build()
            .map_err(FetchError::ClientBuild)?;
        let weather_base_url =
            weather_base_url.unwrap_or_else(|| DEFAULT_WEATHER_BASE_URL.to_string());
        let air_quality_base_url =
            air_quality_base_url.unwrap_or_else(|| DEFAULT_AIR_QUALITY_BASE_URL.to_string());

        Ok(Self {
            http,
            api_key,
            air_quality_token: air_quality_token.filter(|t| !t.is_empty()),
            weather_base_url: weather_base_url.trim_end_matches('/').to_string(),
            air_quality_base_url: air_quality_base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &DashboardConfig) -> Result<Self, FetchError> {
        Self::builder()
            .api_key(config.openweather_api_key.clone())
            .maybe_air_quality_token(config.air_quality_token.clone())
            .weather_base_url(config.weather_base_url.clone())
            .air_quality_base_url(config.air_quality_base_url.clone())
            .build()
    }

    /// Fetches and assembles everything shown for `city`.
    ///
    /// Current weather and forecast are fetched in that order and both are
    /// mandatory: if either fails the whole query fails and nothing partial is
    /// returned. Air quality is best effort and comes back as `None` on any
    /// failure. Pollen is estimated from the current temperature and humidity.
    ///
    /// # Errors
    ///
    /// * [`FetchError::EmptyLocation`] if `city` is blank.
    /// * [`FetchError::NetworkRequest`], [`FetchError::HttpStatus`] or
    ///   [`FetchError::Decode`] if either mandatory call fails.
    /// * [`FetchError::InvalidTimestamp`] if the forecast carries an unusable time.
    pub async fn fetch(&self, city: &str) -> Result<WeatherBundle, FetchError> {
        let city = city.trim();
        if city.is_empty() {
            return Err(FetchError::EmptyLocation);
        }
        info!("Fetching weather for '{}'", city);

        let current = self
            .get_json::<CurrentResponse>(Endpoint::CurrentWeather, "weather", city)
            .await?
            .into_current();
        let forecast = self
            .get_json::<ForecastResponse>(Endpoint::Forecast, "forecast", city)
            .await?
            .into_entries()?;

        let air_quality = match fetch_air_quality(
            &self.http,
            &self.air_quality_base_url,
            self.air_quality_token.as_deref(),
            current.coordinates,
        )
        .await
        {
            Ok(reading) => Some(reading),
            Err(e) => {
                debug!("No air quality data for '{}': {}", city, e);
                None
            }
        };

        let pollen = PollenEstimate::from_conditions(current.temperature, current.humidity);
        info!(
            "Fetched weather for '{}': {} forecast entries, air quality {}",
            current.name,
            forecast.len(),
            if air_quality.is_some() { "available" } else { "unavailable" }
        );

        Ok(WeatherBundle {
            current,
            forecast,
            air_quality,
            pollen,
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        path: &str,
        city: &str,
    ) -> Result<T, FetchError> {
        let url = format!("{}/{}", self.weather_base_url, path);
        let response = self
            .http
            .get(&url)
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await
            .map_err(|e| FetchError::NetworkRequest {
                endpoint,
                source: e.without_url(),
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!("{} request for '{}' failed with status {}", endpoint, city, status);
            return Err(FetchError::HttpStatus { endpoint, status });
        }

        response.json::<T>().await.map_err(|e| FetchError::Decode {
            endpoint,
            source: e.without_url(),
        })
    }
}
