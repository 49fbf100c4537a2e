mod config;
mod error;
mod frames;
pub mod render;
mod types;
mod utils;
mod weather_client;
pub mod web;

pub use crate::config::{
    DashboardConfig, DEFAULT_AIR_QUALITY_BASE_URL, DEFAULT_CITY, DEFAULT_LISTEN_ADDR,
    DEFAULT_WEATHER_BASE_URL,
};
pub use error::{ConfigError, DashboardError};

pub use frames::forecast_frame::*;

pub use types::air_quality::*;
pub use types::condition_style::{classify, ConditionStyle};
pub use types::lat_lon::LatLon;
pub use types::pollen::*;
pub use types::weather_condition::WeatherCondition;
pub use types::weather_data::bundle::WeatherBundle;
pub use types::weather_data::current::CurrentWeather;
pub use types::weather_data::forecast::ForecastEntry;

pub use weather_client::client::{WeatherClient, DEFAULT_REQUEST_TIMEOUT};
pub use weather_client::error::{AirQualityError, Endpoint, FetchError};

pub use render::error::RenderError;
pub use utils::{capitalize, escape_html};
