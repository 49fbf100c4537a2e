use crate::types::air_quality::AirQualityReading;
use crate::types::lat_lon::LatLon;
use crate::weather_client::error::AirQualityError;
use crate::weather_client::responses::AirQualityEnvelope;
use log::info;
use reqwest::Client;

/// Queries the WAQI geo feed for `location`.
///
/// Every failure mode is reported as an [`AirQualityError`]; the caller decides
/// that those are not fatal.
pub(crate) async fn fetch_air_quality(
    http: &Client,
    base_url: &str,
    token: Option<&str>,
    location: LatLon,
) -> Result<AirQualityReading, AirQualityError> {
    let token = token.ok_or(AirQualityError::MissingToken)?;
    let url = format!(
        "{}/geo:{};{}/",
        base_url.trim_end_matches('/'),
        location.latitude(),
        location.longitude()
    );
    info!(
        "Requesting air quality for {:.4}, {:.4}",
        location.latitude(),
        location.longitude()
    );

    let response = http
        .get(&url)
        .query(&[("token", token)])
        .send()
        .await
        .map_err(|e| AirQualityError::NetworkRequest(e.without_url()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(AirQualityError::HttpStatus(status));
    }

    let envelope: AirQualityEnvelope = response
        .json()
        .await
        .map_err(|e| AirQualityError::Decode(e.without_url()))?;
    envelope.into_reading()
}
