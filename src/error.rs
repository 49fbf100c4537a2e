use crate::weather_client::error::FetchError;
use std::net::AddrParseError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to run the web server")]
    Server(#[source] std::io::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration")]
    Load(#[source] config::ConfigError),

    #[error("No OpenWeatherMap API key configured (set openweather_api_key or WEATHERPRO_OPENWEATHER_API_KEY)")]
    MissingApiKey,

    #[error("Setting '{key}' must be an http(s) URL, got '{value}'")]
    InvalidUrl { key: &'static str, value: String },

    #[error("Invalid listen address '{0}'")]
    InvalidListenAddr(String, #[source] AddrParseError),
}
