//! The summary cards shown above the map.

use crate::types::air_quality::AirQualityReading;
use crate::types::pollen::PollenEstimate;
use crate::types::weather_data::current::CurrentWeather;
use crate::utils::{capitalize, escape_html};

const ICON_BASE_URL: &str = "https://openweathermap.org/img/wn";

/// Banner colored by the current condition, with its warning label.
pub fn condition_card(current: &CurrentWeather) -> String {
    let style = current.style();
    format!(
        r#"<div class="condition-card" style="background: {background}; color: {color};">
  <h2>{icon} {category} Conditions</h2>
  <h3>Warning Level: {warning}</h3>
</div>"#,
        background = style.background,
        color = style.text_color,
        icon = style.icon,
        category = escape_html(&current.category),
        warning = style.warning_label,
    )
}

/// Place, description, icon and the four headline readings.
///
/// `city` is the query as typed; it is shown capitalized.
pub fn current_card(city: &str, current: &CurrentWeather) -> String {
    let icon = current
        .icon
        .as_deref()
        .map(|code| {
            format!(
                r#"<img src="{}/{}@2x.png" width="120" alt="{}" class="weather-icon">"#,
                ICON_BASE_URL,
                escape_html(code),
                escape_html(&current.description)
            )
        })
        .unwrap_or_default();

    format!(
        r#"<div class="metric-card">
  <div class="card-row">
    <div>
      <h2>{city}, {country}</h2>
      <h3 class="subtle">{description}</h3>
    </div>
    {icon}
  </div>
  <div class="card-row">
    <div>
      <h4>🌡️ Temperature: {temp}°C</h4>
      <h4>🌡️ Feels Like: {feels_like}°C</h4>
    </div>
    <div>
      <h4>💧 Humidity: {humidity}%</h4>
      <h4>💨 Wind: {wind} m/s</h4>
    </div>
  </div>
</div>"#,
        city = escape_html(&capitalize(city)),
        country = escape_html(current.country.as_deref().unwrap_or_default()),
        description = escape_html(&capitalize(&current.description)),
        icon = icon,
        temp = current.temperature,
        feels_like = current.feels_like,
        humidity = current.humidity,
        wind = current.wind_speed,
    )
}

pub fn air_quality_card(reading: &AirQualityReading) -> String {
    let pollutant = reading
        .dominant_pollutant
        .as_deref()
        .map(|p| format!("\n  <p>Dominant Pollutant: {}</p>", escape_html(p)))
        .unwrap_or_default();
    format!(
        r#"<div class="metric-card">
  <h3>🌍 Air Quality Index</h3>
  <p>AQI: {} - {}</p>{}
</div>"#,
        reading.index,
        reading.level_label(),
        pollutant
    )
}

pub fn pollen_card(pollen: &PollenEstimate) -> String {
    let recommendation = if pollen.risk.advises_staying_indoors() {
        "\n  <p class=\"warning\">Recommendation: Consider staying indoors if you have allergies.</p>"
    } else {
        ""
    };
    format!(
        r#"<div class="metric-card">
  <h3>🌼 Pollen Forecast</h3>
  <p>Estimated Pollen Count: {:.1}</p>
  <p>Risk Level: {}</p>{}
</div>"#,
        pollen.count,
        pollen.risk.badge(),
        recommendation
    )
}
