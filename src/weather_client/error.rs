use std::fmt;
use thiserror::Error;

/// The provider endpoint a request was addressed to.
///
/// Errors name the endpoint instead of the URL so API keys never end up in
/// messages shown to users or written to logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    CurrentWeather,
    Forecast,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Endpoint::CurrentWeather => "current weather",
            Endpoint::Forecast => "forecast",
        })
    }
}

/// A failure of one of the mandatory calls. Fatal to the whole query.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("City name must not be empty")]
    EmptyLocation,

    #[error("Failed to build HTTP client")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Network request failed for {endpoint}")]
    NetworkRequest {
        endpoint: Endpoint,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP request failed for {endpoint} with status {status}")]
    HttpStatus {
        endpoint: Endpoint,
        status: reqwest::StatusCode,
    },

    #[error("Failed to decode {endpoint} response")]
    Decode {
        endpoint: Endpoint,
        #[source]
        source: reqwest::Error,
    },

    #[error("Forecast timestamp {timestamp} (offset {offset_seconds}s) is out of range")]
    InvalidTimestamp { timestamp: i64, offset_seconds: i32 },
}

impl FetchError {
    /// The HTTP status, for failures caused by a non-success response.
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            FetchError::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Why the air quality feed produced no data.
///
/// Never surfaced to the user: the client logs it and carries on without
/// air quality.
#[derive(Debug, Error)]
pub enum AirQualityError {
    #[error("No air quality token configured")]
    MissingToken,

    #[error("Network request failed for air quality")]
    NetworkRequest(#[source] reqwest::Error),

    #[error("Air quality request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),

    #[error("Failed to decode air quality response")]
    Decode(#[source] reqwest::Error),

    #[error("Air quality feed reported status '{0}'")]
    NotOk(String),

    #[error("Air quality payload is malformed")]
    Payload(#[source] serde_json::Error),

    #[error("Air quality index is not an integer: {0}")]
    InvalidIndex(serde_json::Value),
}
